pub mod agencies;
pub mod cases;
pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod finance;
pub mod legal_assistant;
pub mod login;
pub mod not_found;
pub mod sessions;
pub mod tasks;

use crate::auth::{use_auth, AuthStatus};
use crate::breakpoint::use_is_mobile;
use crate::components::dialogs::LogoutConfirmDialog;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdCalendar, LdClock, LdLayoutDashboard, LdLogOut, LdMenu, LdMoon,
    LdScale, LdSun, LdUserCheck, LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::AppConfig;
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{
    Navbar, NavbarUser, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader,
    SidebarInset, SidebarMenuButton, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use agencies::Agencies;
use cases::{CaseDetail, CaseList};
use customers::Customers;
use dashboard::Dashboard;
use employees::Employees;
use finance::Finance;
use legal_assistant::LegalAssistant;
use login::Login;
use not_found::NotFound;
use sessions::Sessions;
use tasks::Tasks;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/cases")]
    CaseList {},
    #[route("/cases/:id")]
    CaseDetail { id: String },
    #[route("/customers")]
    Customers {},
    #[route("/employees")]
    Employees {},
    #[route("/sessions")]
    Sessions {},
    #[route("/tasks")]
    Tasks {},
    #[route("/agencies")]
    Agencies {},
    #[route("/finance")]
    Finance {},
    #[route("/legal-assistant")]
    LegalAssistant {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Arabic title shown in the navbar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login {} => "تسجيل الدخول",
            Route::Dashboard {} => "لوحة التحكم",
            Route::CaseList {} | Route::CaseDetail { .. } => "القضايا",
            Route::Customers {} => "العملاء",
            Route::Employees {} => "الموظفون",
            Route::Sessions {} => "الجلسات",
            Route::Tasks {} => "المهام",
            Route::Agencies {} => "الوكالات",
            Route::Finance {} => "المالية",
            Route::LegalAssistant {} => "المساعد القانوني",
            Route::NotFound { .. } => "الصفحة غير موجودة",
        }
    }
}

/// Keeps signed-out users away from the office pages.
///
/// While the stored token is being checked a placeholder is shown; an
/// unauthenticated client is sent to the login page.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let status = auth.state.status;

    use_effect(move || {
        if *status.read() == AuthStatus::Unauthenticated {
            navigator().push(Route::Login {});
        }
    });

    match auth.status() {
        AuthStatus::Authenticated => rsx! { Outlet::<Route> {} },
        AuthStatus::Unauthenticated => rsx! {
            div { class: "auth-guard-loading",
                p { "جارٍ التحويل إلى صفحة الدخول..." }
            }
        },
        AuthStatus::Checking => rsx! {
            div { class: "auth-guard-loading",
                p { "جارٍ التحقق من الجلسة..." }
            }
        },
    }
}

/// One sidebar entry.
#[derive(Clone, PartialEq)]
struct NavEntry {
    to: Route,
    label: &'static str,
}

/// Whether `current` belongs to the section rooted at `entry`.
fn is_active(entry: &Route, current: &Route) -> bool {
    match (entry, current) {
        (Route::CaseList {}, Route::CaseDetail { .. }) => true,
        _ => entry == current,
    }
}

fn nav_entries(config: &AppConfig) -> Vec<NavEntry> {
    let mut entries = vec![
        NavEntry { to: Route::Dashboard {}, label: "لوحة التحكم" },
        NavEntry { to: Route::CaseList {}, label: "القضايا" },
        NavEntry { to: Route::Customers {}, label: "العملاء" },
        NavEntry { to: Route::Employees {}, label: "الموظفون" },
        NavEntry { to: Route::Sessions {}, label: "الجلسات" },
        NavEntry { to: Route::Tasks {}, label: "المهام" },
        NavEntry { to: Route::Agencies {}, label: "الوكالات" },
        NavEntry { to: Route::Finance {}, label: "المالية" },
    ];
    if config.features.legal_assistant {
        entries.push(NavEntry {
            to: Route::LegalAssistant {},
            label: "المساعد القانوني",
        });
    }
    entries
}

#[component]
fn NavIcon(to: Route) -> Element {
    match to {
        Route::CaseList {} | Route::CaseDetail { .. } => {
            rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } }
        }
        Route::Customers {} => rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
        Route::Employees {} => rsx! { Icon { icon: LdUserCheck, width: 18, height: 18 } },
        Route::Sessions {} => rsx! { Icon { icon: LdCalendar, width: 18, height: 18 } },
        Route::Tasks {} => rsx! { Icon { icon: LdClock, width: 18, height: 18 } },
        Route::Agencies {} => rsx! { Icon { icon: LdScale, width: 18, height: 18 } },
        Route::Finance {} => rsx! { Icon { icon: LdWallet, width: 18, height: 18 } },
        Route::LegalAssistant {} => rsx! { Icon { icon: LdBookOpen, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: LdLayoutDashboard, width: 18, height: 18 } },
    }
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let config = use_context::<Signal<AppConfig>>();
    let auth = use_auth();
    let is_mobile = use_is_mobile();
    let mut confirm_logout = use_signal(|| false);

    let mut theme = use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::Light),
    });
    let mode = *theme.mode.read();

    let entries = nav_entries(&config.read());
    let office_name = config.read().office.name.clone();
    let user = auth.user();

    let do_logout = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn(async move {
                auth.logout().await;
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true, mobile: is_mobile,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "{office_name}" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup { label: "القائمة الرئيسية",
                        for entry in entries {
                            SidebarMenuButton {
                                key: "{entry.label}",
                                active: is_active(&entry.to, &route),
                                onclick: {
                                    let to = entry.to.clone();
                                    move |_| {
                                        navigator().push(to.clone());
                                    }
                                },
                                NavIcon { to: entry.to.clone() }
                                span { "{entry.label}" }
                            }
                        }
                    }
                }

                SidebarFooter {
                    SidebarMenuButton {
                        onclick: move |_| confirm_logout.set(true),
                        Icon { icon: LdLogOut, width: 18, height: 18 }
                        span { "تسجيل الخروج" }
                    }
                }
            }

            SidebarInset {
                Navbar {
                    start: rsx! {
                        SidebarTrigger {
                            Icon { icon: LdMenu, width: 20, height: 20 }
                        }
                        h1 { class: "navbar-page-title", "{route.title()}" }
                    },
                    end: rsx! {
                        button {
                            class: "navbar-theme-toggle",
                            r#type: "button",
                            title: "{mode.toggled().label()}",
                            onclick: move |_| theme.toggle(),
                            if mode == ThemeMode::Dark {
                                Icon { icon: LdSun, width: 18, height: 18 }
                            } else {
                                Icon { icon: LdMoon, width: 18, height: 18 }
                            }
                        }
                        if let Some(user) = user {
                            NavbarUser {
                                name: user.name.clone(),
                                initials: user.initials(),
                                role: user.role.label().to_string(),
                            }
                        }
                    },
                }

                main { class: "main-content",
                    Outlet::<Route> {}
                }
            }
        }

        LogoutConfirmDialog {
            open: confirm_logout(),
            on_open_change: move |open| confirm_logout.set(open),
            on_confirm: do_logout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthState;

    #[component]
    fn GuardWith(status: AuthStatus) -> Element {
        use_context_provider(|| AuthState {
            status: Signal::new(status),
            user: Signal::new(None),
            error: Signal::new(None),
        });
        rsx! { AuthGuard {} }
    }

    fn render_guard(status: AuthStatus) -> String {
        let mut dom = VirtualDom::new_with_props(GuardWith, GuardWithProps { status });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn guard_shows_placeholder_while_checking() {
        let html = render_guard(AuthStatus::Checking);
        assert!(html.contains("auth-guard-loading"));
        assert!(html.contains("جارٍ التحقق من الجلسة..."));
        assert!(!html.contains("صفحة الدخول"));
    }

    #[test]
    fn guard_shows_redirect_notice_when_signed_out() {
        let html = render_guard(AuthStatus::Unauthenticated);
        assert!(html.contains("جارٍ التحويل إلى صفحة الدخول..."));
        assert!(!html.contains("جارٍ التحقق من الجلسة"));
    }

    #[test]
    fn case_detail_highlights_the_case_list_entry() {
        let detail = Route::CaseDetail { id: "case-1".into() };
        assert!(is_active(&Route::CaseList {}, &detail));
        assert!(!is_active(&Route::Customers {}, &detail));
        assert!(is_active(&Route::Finance {}, &Route::Finance {}));
    }

    #[test]
    fn legal_assistant_entry_follows_feature_flag() {
        let mut config = AppConfig::default();
        let has_assistant =
            |c: &AppConfig| nav_entries(c).iter().any(|e| e.to == Route::LegalAssistant {});
        assert!(!has_assistant(&config));
        config.features.legal_assistant = true;
        assert!(has_assistant(&config));
    }

    #[test]
    fn routes_parse_from_paths() {
        assert_eq!("/cases/case-3".parse::<Route>().ok(), Some(Route::CaseDetail { id: "case-3".into() }));
        assert_eq!("/legal-assistant".parse::<Route>().ok(), Some(Route::LegalAssistant {}));
        assert!(matches!("/nowhere".parse::<Route>(), Ok(Route::NotFound { .. })));
    }
}
