use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::{AttributeValue, ElementId, Mutation, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{
    PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData, set_event_converter,
};
use services::StudyLoopService;
use vocab_core::model::Vocabulary;

use crate::context::{UiApp, build_app_context};
use crate::views::StudyView;
use crate::views::study::StudyTestHandles;
use crate::vm::{StudyIntent, StudyVm};

struct TestApp {
    study_loop: Arc<StudyLoopService>,
}

impl UiApp for TestApp {
    fn study_loop(&self) -> Arc<StudyLoopService> {
        Arc::clone(&self.study_loop)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: StudyTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn StudyHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { StudyView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: StudyTestHandles,
    classes: Vec<(ElementId, String)>,
}

impl ViewHarness {
    /// Build the view and remember which element carries which dynamic class.
    pub fn rebuild(&mut self) {
        let mutations = self.dom.rebuild_to_vec();
        self.classes = mutations
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::SetAttribute {
                    name,
                    value: AttributeValue::Text(class),
                    id,
                    ..
                } if name == "class" => Some((id, class)),
                _ => None,
            })
            .collect();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Dispatch an intent through the view's own callback and re-render.
    pub fn dispatch(&mut self, intent: StudyIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Fire a bubbling DOM click on the element that had `class` at build time.
    ///
    /// Unlike `dispatch`, this runs the element's own listeners, so
    /// `stop_propagation` and parent handlers take part.
    pub fn click(&mut self, class: &str) {
        let id = self.element_with_class(class);
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event("click", event, id);
        drive_dom(&mut self.dom);
    }

    fn element_with_class(&self, class: &str) -> ElementId {
        self.classes
            .iter()
            .find(|(_, classes)| classes.split_whitespace().any(|token| token == class))
            .map(|(id, _)| *id)
            .unwrap_or_else(|| panic!("no element with class {class:?} in {:?}", self.classes))
    }

    pub fn with_vm<T>(&self, f: impl FnOnce(&StudyVm) -> T) -> T {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(&vm.peek()))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over the letters `A`, `B`, `C` with a fixed seed.
pub fn setup_letters_harness() -> ViewHarness {
    let vocabulary = Vocabulary::from_pairs([
        ("A", "alpha"),
        ("B", "bravo"),
        ("C", "charlie"),
    ])
    .expect("letters vocabulary");
    setup_view_harness(StudyLoopService::new(vocabulary).with_seed(Some(17)))
}

pub fn setup_view_harness(study_loop: StudyLoopService) -> ViewHarness {
    let handles = StudyTestHandles::default();
    let app = Arc::new(TestApp {
        study_loop: Arc::new(study_loop),
    });
    let dom = VirtualDom::new_with_props(
        StudyHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        handles,
        classes: Vec::new(),
    }
}
