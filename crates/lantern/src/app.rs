//! Lantern application root: a scrollable chat list whose rows open a
//! context menu on right-click.

use std::collections::HashMap;
use std::sync::Arc;

use gpui::{
    div, prelude::*, px, Context, IntoElement, MouseButton, MouseDownEvent, Pixels, Point, Render,
    Subscription, Window,
};
use lantern_core::{
    ContextMenuHandle, ContextMenuTrigger, CursorPosition, MenuEntry, MenuItem, ScrollInput,
    ScrollSuppressor,
};
use lantern_ui::{LanternTheme, MenuOverlay, ThemeColors};
use parking_lot::Mutex;

/// One conversation in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: u32,
    pub name: String,
    pub unread: u32,
    pub pinned: bool,
    pub archived: bool,
    /// How long notifications are muted for, if muted.
    pub muted_for: Option<String>,
    /// The built-in device messages chat cannot be deleted.
    pub is_device_chat: bool,
}

impl Chat {
    fn new(id: u32, name: &str, unread: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            unread,
            pinned: false,
            archived: false,
            muted_for: None,
            is_device_chat: false,
        }
    }
}

/// Chat list state shared with menu actions.
#[derive(Debug, Default)]
pub struct ChatList {
    pub chats: Vec<Chat>,
    /// What the last menu action did.
    pub status: Option<String>,
}

impl ChatList {
    /// Sample conversations.
    pub fn sample() -> Self {
        const NAMES: [&str; 24] = [
            "Saved Messages", "Alice", "Bob", "Family", "Book Club", "Carol", "Dave",
            "Climbing Crew", "Erin", "Frank", "Release Planning", "Grace", "Heidi",
            "Neighbours", "Ivan", "Judy", "Mallory", "Board Games", "Niaj", "Olivia",
            "Peggy", "Rupert", "Sybil", "Trent",
        ];
        let mut chats: Vec<Chat> = NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Chat::new(i as u32 + 1, name, (i as u32 * 7) % 5))
            .collect();
        if let Some(device) = chats.first_mut() {
            device.is_device_chat = true;
            device.unread = 0;
        }
        Self { chats, status: None }
    }

    fn update(&mut self, id: u32, status: String, f: impl FnOnce(&mut Chat)) {
        if let Some(chat) = self.chats.iter_mut().find(|chat| chat.id == id) {
            f(chat);
            tracing::info!(chat = id, "{status}");
            self.status = Some(status);
        }
    }
}

type SharedChats = Arc<Mutex<ChatList>>;

/// Menu action that edits one chat and records a status line.
fn chat_action(
    chats: &SharedChats,
    id: u32,
    status: impl Into<String>,
    f: impl Fn(&mut Chat) + Send + Sync + 'static,
) -> impl Fn() + Send + Sync + 'static {
    let chats = chats.clone();
    let status = status.into();
    move || chats.lock().update(id, status.clone(), &f)
}

/// Items of the context menu for chat `id`, built when the menu opens.
pub fn chat_menu(chats: &SharedChats, id: u32) -> Vec<MenuEntry> {
    let Some(chat) = chats.lock().chats.iter().find(|chat| chat.id == id).cloned() else {
        return Vec::new();
    };
    let name = chat.name.clone();

    let mute = |label: &'static str, duration: &'static str| {
        Some(MenuItem::action(
            label,
            chat_action(chats, id, format!("Muted {name} for {duration}"), move |chat| {
                chat.muted_for = Some(duration.to_string())
            }),
        ))
    };

    let delete_chats = chats.clone();
    vec![
        (chat.unread > 0).then(|| {
            MenuItem::action(
                "Mark as Read",
                chat_action(chats, id, format!("Marked {name} as read"), |chat| chat.unread = 0),
            )
            .icon("info")
        }),
        Some(
            MenuItem::action(
                if chat.pinned { "Unpin Chat" } else { "Pin Chat" },
                chat_action(chats, id, format!("Toggled pin on {name}"), |chat| {
                    chat.pinned = !chat.pinned
                }),
            )
            .icon("pin"),
        ),
        chat.muted_for.is_none().then(|| {
            MenuItem::submenu(
                "Mute Notifications",
                vec![
                    mute("Mute for 1 hour", "1 hour"),
                    mute("Mute for 8 hours", "8 hours"),
                    mute("Mute for 1 week", "1 week"),
                    mute("Mute Forever", "ever"),
                ],
            )
            .icon("mute")
        }),
        chat.muted_for.is_some().then(|| {
            MenuItem::action(
                "Unmute",
                chat_action(chats, id, format!("Unmuted {name}"), |chat| chat.muted_for = None),
            )
        }),
        Some(
            MenuItem::action(
                if chat.archived { "Unarchive Chat" } else { "Archive Chat" },
                chat_action(chats, id, format!("Toggled archive on {name}"), |chat| {
                    chat.archived = !chat.archived
                }),
            )
            .icon("archive"),
        ),
        Some(MenuItem::separator()),
        (!chat.is_device_chat).then(|| {
            MenuItem::action("Delete Chat", move || {
                let mut list = delete_chats.lock();
                list.chats.retain(|chat| chat.id != id);
                list.status = Some(format!("Deleted {name}"));
                tracing::info!(chat = id, "Chat deleted");
            })
            .icon("delete")
            .test_id("delete-chat")
        }),
    ]
}

/// Root application component that manages the main window.
pub struct LanternApp {
    chats: SharedChats,
    menu: Option<ContextMenuHandle>,
    scroll: Option<ScrollSuppressor>,
    triggers: HashMap<u32, ContextMenuTrigger>,
    _appearance_subscription: Subscription,
}

impl LanternApp {
    /// Create the root view and mount the menu overlay over `window`.
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let menu = MenuOverlay::mount(window, cx);
        if menu.is_none() {
            tracing::error!("Menu overlay is not installed; context menus are disabled");
        }
        let scroll = cx.try_global::<MenuOverlay>().map(MenuOverlay::scroll_suppressor);
        let appearance_subscription = cx.observe_window_appearance(window, |_, window, cx| {
            MenuOverlay::apply_theme(LanternTheme::for_appearance(window.appearance()), cx);
        });

        Self {
            chats: Arc::new(Mutex::new(ChatList::sample())),
            menu,
            scroll,
            triggers: HashMap::new(),
            _appearance_subscription: appearance_subscription,
        }
    }

    fn open_menu(
        &mut self,
        id: u32,
        position: Point<Pixels>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(handle) = self.menu.clone() else {
            return;
        };
        let chats = self.chats.clone();
        let trigger = self.triggers.entry(id).or_insert_with(|| {
            ContextMenuTrigger::factory(move || chat_menu(&chats, id), handle).aria_label("Chat")
        });

        let cursor = CursorPosition::new(f32::from(position.x), f32::from(position.y));
        match trigger.open(cursor) {
            Ok(session) => {
                tracing::debug!(session = %session.id(), chat = id, "Opened chat menu");
                MenuOverlay::focus(window, cx);
            }
            Err(e) => {
                self.chats.lock().status = Some(e.to_string());
            }
        }
        cx.notify();
    }

    fn render_row(
        &self,
        chat: &Chat,
        colors: &ThemeColors,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let id = chat.id;
        let active = self.triggers.get(&id).is_some_and(ContextMenuTrigger::is_active);

        let mut badges = Vec::new();
        if chat.pinned {
            badges.push("pinned".to_string());
        }
        if chat.archived {
            badges.push("archived".to_string());
        }
        if let Some(duration) = &chat.muted_for {
            badges.push(format!("muted {duration}"));
        }

        div()
            .id(("chat-row", id as usize))
            .px(px(12.0))
            .py(px(8.0))
            .flex()
            .items_center()
            .gap(px(8.0))
            .border_b_1()
            .border_color(colors.border)
            .when(active, |d| d.bg(colors.list_active_selection_background))
            .when(!active, |d| d.hover(|s| s.bg(colors.list_hover_background)))
            .on_mouse_down(
                MouseButton::Right,
                cx.listener(move |this, e: &MouseDownEvent, window, cx| {
                    this.open_menu(id, e.position, window, cx);
                }),
            )
            .child(div().flex_1().child(chat.name.clone()))
            .when(!badges.is_empty(), |d| {
                d.child(div().text_xs().text_color(colors.text_muted).child(badges.join(", ")))
            })
            .when(chat.unread > 0, |d| {
                d.child(
                    div()
                        .px(px(6.0))
                        .rounded(px(8.0))
                        .bg(colors.accent)
                        .text_xs()
                        .text_color(colors.background)
                        .child(chat.unread.to_string()),
                )
            })
    }
}

impl Render for LanternApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // A resize closes the open menu
        MenuOverlay::sync_viewport(window, cx);

        let theme = cx.global::<LanternTheme>().clone();
        let colors = &theme.colors;
        let (chats, status) = {
            let list = self.chats.lock();
            (list.chats.clone(), list.status.clone())
        };
        let rows: Vec<_> = chats.iter().map(|chat| self.render_row(chat, colors, cx)).collect();
        let scroll = self.scroll.clone();

        div()
            .relative()
            .flex()
            .flex_col()
            .size_full()
            .bg(colors.background)
            .text_color(colors.text)
            .child(div().px(px(12.0)).py(px(10.0)).text_lg().child("Chats"))
            .child(
                div().id("chat-list").flex_1().overflow_y_scroll().bg(colors.surface).child(
                    div()
                        .flex()
                        .flex_col()
                        .on_scroll_wheel(move |_, _, cx| {
                            let suppress = scroll
                                .as_ref()
                                .is_some_and(|s| s.should_suppress(ScrollInput::Wheel));
                            if suppress {
                                cx.stop_propagation();
                            }
                        })
                        .children(rows),
                ),
            )
            .child(
                div()
                    .px(px(12.0))
                    .py(px(6.0))
                    .text_xs()
                    .text_color(colors.text_muted)
                    .border_t_1()
                    .border_color(colors.border)
                    .child(status.unwrap_or_else(|| "Right-click a chat for options".into())),
            )
            .children(cx.try_global::<MenuOverlay>().and_then(|overlay| overlay.render(&theme)))
    }
}
