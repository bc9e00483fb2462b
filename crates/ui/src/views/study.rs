use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{CardFace, StudyIntent, start_study};

#[cfg(test)]
use crate::vm::StudyVm;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn intent_for_key(key: &Key, code: Code) -> Option<StudyIntent> {
    if code == Code::Space {
        return Some(StudyIntent::Flip);
    }
    match key {
        Key::ArrowRight => Some(StudyIntent::Next),
        Key::Character(value) => match value.as_str() {
            "n" | "N" => Some(StudyIntent::Next),
            "s" | "S" => Some(StudyIntent::ToggleStar),
            "r" | "R" => Some(StudyIntent::Reshuffle),
            _ => None,
        },
        _ => None,
    }
}

/// Keys a focused control activates itself with. They stay on the control so
/// Space on the star or a button never reaches the card shortcuts.
fn is_control_activation(code: Code) -> bool {
    matches!(code, Code::Space | Code::Enter | Code::NumpadEnter)
}

fn keep_on_control(evt: &KeyboardEvent) {
    if is_control_activation(evt.data.code()) {
        evt.stop_propagation();
    }
}

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || start_study(&ctx.study_loop()));

    let dispatch_intent = use_callback(move |intent: StudyIntent| {
        let mut vm = vm;
        vm.write().apply(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    use_effect(|| {
        let _ = eval("document.getElementById(\"study-root\")?.focus();");
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let modifiers = evt.data.modifiers();
        if modifiers.intersects(Modifiers::CONTROL | Modifiers::META | Modifiers::ALT) {
            return;
        }
        if let Some(intent) = intent_for_key(&evt.data.key(), evt.data.code()) {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    let vm_guard = vm.read();
    let has_card = vm_guard.has_card();
    let snapshot = vm_guard.snapshot();
    let face = vm_guard.face();
    let face_text = vm_guard.face_text().to_owned();
    let position_label = vm_guard.position_label();
    drop(vm_guard);

    let card_class = match face {
        CardFace::Term => "flashcard",
        CardFace::Definition => "flashcard flashcard--revealed",
    };
    let empty_message = (!has_card && snapshot.only_starred)
        .then_some("No starred cards yet. Star a card to study it here.");
    let starred_count = format!("{} / {}", snapshot.starred_count, snapshot.total);

    rsx! {
        div { class: "page study-page", id: "study-root", tabindex: "0", onkeydown: on_key,
            div {
                class: "{card_class}",
                id: "study-card",
                role: "button",
                onclick: move |_| {
                    if has_card {
                        dispatch_intent.call(StudyIntent::Flip);
                    }
                },
                StarToggle {
                    starred: snapshot.starred,
                    disabled: !has_card,
                    on_intent: dispatch_intent,
                }
                div { class: "flashcard__face",
                    if let Some(message) = empty_message {
                        p { class: "flashcard__empty", "{message}" }
                    } else {
                        strong { class: "flashcard__text", "{face_text}" }
                    }
                }
            }
            div { class: "study-controls",
                div { class: "study-controls__group",
                    button {
                        class: "btn btn-primary",
                        id: "study-shuffle",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(StudyIntent::Reshuffle),
                        onkeydown: move |evt: KeyboardEvent| keep_on_control(&evt),
                        "Shuffle"
                    }
                    label { class: "study-filter",
                        input {
                            id: "study-only-starred",
                            r#type: "checkbox",
                            checked: snapshot.only_starred,
                            onkeydown: move |evt: KeyboardEvent| keep_on_control(&evt),
                            onchange: move |evt: FormEvent| {
                                dispatch_intent.call(StudyIntent::SetOnlyStarred(evt.checked()));
                            },
                        }
                        "Starred only"
                        span { class: "study-filter__count", title: "Starred cards", "{starred_count}" }
                    }
                }
                span { class: "study-position", id: "study-position", "{position_label}" }
                button {
                    class: "btn btn-secondary",
                    id: "study-next",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(StudyIntent::Next),
                    onkeydown: move |evt: KeyboardEvent| keep_on_control(&evt),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn StarToggle(starred: bool, disabled: bool, on_intent: EventHandler<StudyIntent>) -> Element {
    let (class, label, glyph) = if starred {
        ("flashcard__star flashcard__star--on", "Unstar card", "★")
    } else {
        ("flashcard__star", "Star card", "☆")
    };
    rsx! {
        button {
            class: "{class}",
            id: "study-star",
            r#type: "button",
            title: "{label}",
            aria_label: "{label}",
            aria_pressed: "{starred}",
            disabled: disabled,
            onkeydown: move |evt: KeyboardEvent| keep_on_control(&evt),
            onclick: move |evt: MouseEvent| {
                // The star sits on the card; keep the click from flipping it.
                evt.stop_propagation();
                on_intent.call(StudyIntent::ToggleStar);
            },
            "{glyph}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct StudyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<StudyIntent>>>>,
    vm: Rc<RefCell<Option<Signal<StudyVm>>>>,
}

#[cfg(test)]
impl StudyTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<StudyIntent>, vm: Signal<StudyVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<StudyIntent> {
        (*self.dispatch.borrow()).expect("study dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<StudyVm> {
        (*self.vm.borrow()).expect("study vm registered")
    }
}
