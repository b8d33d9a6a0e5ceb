use {
    crate::{
        app::Notification,
        config::TOASTS,
        ui::{NotificationColor, UI_CONFIG},
        utils::AppInstant,
    },
    eframe::egui::{Align2, Area, Context, Frame, Id, Order, RichText, Stroke, vec2},
    std::{collections::VecDeque, time::Duration},
};

struct Toast {
    notification: Notification,
    raised_at: AppInstant,
}

/// Transient notifications stacked in the top-right corner.
#[derive(Default)]
pub(crate) struct ToastStack {
    toasts: VecDeque<Toast>,
}

impl ToastStack {
    pub(crate) fn push(&mut self, notification: Notification) {
        self.push_at(notification, AppInstant::now());
    }

    pub(crate) fn push_at(&mut self, notification: Notification, now: AppInstant) {
        self.toasts.push_back(Toast {
            notification,
            raised_at: now,
        });
        while self.toasts.len() > TOASTS.max_visible {
            self.toasts.pop_front();
        }
    }

    pub(crate) fn prune(&mut self, now: AppInstant) {
        self.toasts
            .retain(|t| now.saturating_duration_since(t.raised_at) < TOASTS.lifetime);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub(crate) fn show(&mut self, ctx: &Context) {
        self.prune(AppInstant::now());
        if self.is_empty() {
            return;
        }

        Area::new(Id::new("toast_stack"))
            .order(Order::Foreground)
            .anchor(Align2::RIGHT_TOP, vec2(-16.0, 16.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let color = toast.notification.kind.color();
                    Frame::popup(ui.style())
                        .fill(UI_CONFIG.colors.card)
                        .stroke(Stroke::new(1.5, color))
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_width(TOASTS.width);
                            ui.label(
                                RichText::new(&toast.notification.title)
                                    .strong()
                                    .color(color),
                            );
                            ui.label(&toast.notification.body);
                        });
                    ui.add_space(8.0);
                }
            });

        // Keep ticking so expired toasts disappear without user input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(body: &str) -> Notification {
        Notification::destructive("Upload Failed", body)
    }

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let start = AppInstant::now();
        let mut stack = ToastStack::default();
        stack.push_at(note("first"), start);
        stack.push_at(note("second"), start + Duration::from_secs(2));

        stack.prune(start + TOASTS.lifetime - Duration::from_millis(1));
        assert_eq!(stack.toasts.len(), 2);

        stack.prune(start + TOASTS.lifetime);
        assert_eq!(stack.toasts.len(), 1);

        stack.prune(start + TOASTS.lifetime + Duration::from_secs(2));
        assert!(stack.is_empty());
    }

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let now = AppInstant::now();
        let mut stack = ToastStack::default();
        for i in 0..TOASTS.max_visible + 2 {
            stack.push_at(note(&format!("n{}", i)), now);
        }
        assert_eq!(stack.toasts.len(), TOASTS.max_visible);
        assert_eq!(stack.toasts.front().unwrap().notification.body, "n2");
    }
}
