use crate::shared::config::MAX_VISIBLE_NOTIFICATIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Destructive,
}

impl NotificationVariant {
    fn class(&self) -> &'static str {
        match self {
            NotificationVariant::Success => "notification notification--success",
            NotificationVariant::Destructive => "notification notification--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

/// Очередь уведомлений, новые в конце
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NotificationVariant,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        });
        if self.items.len() > MAX_VISIBLE_NOTIFICATIONS {
            let overflow = self.items.len() - MAX_VISIBLE_NOTIFICATIONS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Service that shows transient notifications.
///
/// Provided once at the app root; handlers fetch it with
/// [`use_notifications`]. Each notification removes itself after the
/// configured timeout.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            timeout_ms,
        }
    }

    pub fn success(&self, description: impl Into<String>) {
        self.show("Success", description, NotificationVariant::Success);
    }

    pub fn error(&self, description: impl Into<String>) {
        self.show("Error", description, NotificationVariant::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, title: &str, description: impl Into<String>, variant: NotificationVariant) {
        let description = description.into();
        let Some(id) = self
            .queue
            .try_update(|q| q.push(title, description, variant))
        else {
            return;
        };

        let queue = self.queue;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
            // The view may already be gone
            let _ = queue.try_update(|q| q.dismiss(id));
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the active notifications in a fixed corner stack
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-stack" role="status" aria-live="polite">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.variant.class()>
                            <div class="notification__text">
                                <div class="notification__title">{n.title}</div>
                                <div class="notification__description">{n.description}</div>
                            </div>
                            <button
                                class="notification__close"
                                title="Close"
                                on:click=move |_| service.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("Error", "boom", NotificationVariant::Destructive);
        let b = queue.push("Success", "ok", NotificationVariant::Success);
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].description, "boom");
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("Error", "first", NotificationVariant::Destructive);
        let b = queue.push("Error", "second", NotificationVariant::Destructive);
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut queue = NotificationQueue::default();
        for i in 0..MAX_VISIBLE_NOTIFICATIONS + 2 {
            queue.push("Error", format!("n{}", i), NotificationVariant::Destructive);
        }
        assert_eq!(queue.items().len(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(queue.items()[0].description, "n2");
    }
}
