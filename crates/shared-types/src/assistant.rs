use serde::{Deserialize, Serialize};

use crate::common::matches_query;
use crate::provider::{Collection, Record};

/// A reference article the legal assistant can answer with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantArticle {
    pub id: String,
    pub title: String,
    pub category: String,
    pub body: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl AssistantArticle {
    /// Number of question words found in this article's title or keywords.
    ///
    /// Words shorter than three characters are ignored so particles don't
    /// match everything.
    pub fn relevance(&self, question: &str) -> usize {
        let haystack = format!("{} {}", self.title, self.keywords.join(" "));
        question
            .split_whitespace()
            .filter(|w| w.chars().count() >= 3)
            .filter(|w| matches_query(&haystack, w))
            .count()
    }
}

/// Rank articles for a question, best first, dropping the irrelevant ones.
pub fn rank_articles(articles: &[AssistantArticle], question: &str) -> Vec<AssistantArticle> {
    let mut scored: Vec<(usize, &AssistantArticle)> = articles
        .iter()
        .map(|a| (a.relevance(question), a))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, a)| a.clone()).collect()
}

impl Record for AssistantArticle {
    const COLLECTION: Collection = Collection::Articles;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.category, self.keywords.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, title: &str, keywords: &[&str]) -> AssistantArticle {
        AssistantArticle {
            id: id.into(),
            title: title.into(),
            category: "عام".into(),
            body: String::new(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn rank_orders_by_matching_words() {
        let articles = vec![
            article("a1", "مدة الاستئناف", &["استئناف", "مهلة"]),
            article("a2", "فسخ عقد الإيجار", &["إيجار", "عقد", "إخلاء"]),
        ];
        let ranked = rank_articles(&articles, "ما هي شروط فسخ عقد الإيجار");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "a2");
    }

    #[test]
    fn short_words_are_ignored() {
        let articles = vec![article("a1", "في المحكمة", &[])];
        assert!(rank_articles(&articles, "في").is_empty());
    }
}
