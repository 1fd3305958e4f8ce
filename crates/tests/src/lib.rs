#[cfg(test)]
mod common;

#[cfg(test)]
mod collection_list_tests;

#[cfg(test)]
mod collection_get_tests;

#[cfg(test)]
mod case_status_tests;

#[cfg(test)]
mod case_attachment_tests;

#[cfg(test)]
mod dashboard_tests;
