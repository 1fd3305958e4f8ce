use dioxus::prelude::*;
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};

/// Close the prompt, then end the session.
pub(super) fn confirm_logout(on_open_change: EventHandler<bool>, on_confirm: EventHandler<()>) {
    on_open_change.call(false);
    on_confirm.call(());
}

/// Ask before ending the session.
#[component]
pub fn LogoutConfirmDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |next: bool| on_open_change.call(next),
            AlertDialogContent {
                AlertDialogTitle { "تسجيل الخروج" }
                AlertDialogDescription { "هل أنت متأكد من رغبتك في تسجيل الخروج؟" }
                AlertDialogActions {
                    AlertDialogCancel { "إلغاء" }
                    AlertDialogAction {
                        on_click: move |_| confirm_logout(on_open_change, on_confirm),
                        "تسجيل الخروج"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dialogs::test_support::{in_dom, recorder};

    #[test]
    fn confirming_closes_then_logs_out_once() {
        in_dom(|| {
            let (opens, on_open_change) = recorder::<bool>();
            let (confirms, on_confirm) = recorder::<()>();
            confirm_logout(on_open_change, on_confirm);
            assert_eq!(*opens.borrow(), vec![false]);
            assert_eq!(confirms.borrow().len(), 1);
        });
    }
}
