use std::cell::RefCell;
use std::rc::Rc;
use stopwatch_widget::web::IntervalSampler;
use stopwatch_widget::{Stopwatch, SystemClock};
use web_sys::HtmlInputElement;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

pub type AppStopwatch = Stopwatch<SystemClock, IntervalSampler>;

/// Shared access to the component's stopwatch. Every mutation goes through
/// `update`, which also schedules a re-render.
#[derive(Clone)]
pub struct StopwatchHandle {
    inner: Rc<RefCell<AppStopwatch>>,
    redraw: UseForceUpdateHandle,
}

impl StopwatchHandle {
    pub fn update<R>(&self, f: impl FnOnce(&mut AppStopwatch) -> R) -> R {
        let out = f(&mut *self.inner.borrow_mut());
        self.redraw.force_update();
        out
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppStopwatch) -> R) -> R {
        f(&*self.inner.borrow())
    }
}

/// One stopwatch per component instance. Its sampler re-renders the
/// component on every tick while running; unmounting drops the interval.
#[hook]
pub fn use_stopwatch() -> StopwatchHandle {
    let redraw = use_force_update();
    let inner = {
        let tick_redraw = redraw.clone();
        use_mut_ref(move || {
            let on_tick = Callback::from(move |_: ()| tick_redraw.force_update());
            Stopwatch::new(SystemClock, IntervalSampler::new(on_tick))
        })
    };
    StopwatchHandle { inner, redraw }
}

/// Holds the state and callbacks for a text field validated on commit.
#[derive(Clone)]
pub struct ValidatedField<T: Clone + PartialEq + 'static> {
    /// The current text content of the input field.
    pub text: String,
    /// Last value that passed validation.
    pub value: T,
    pub error: Option<String>,
    pub on_text_input: Callback<InputEvent>,
    /// Parse the current text; on success the text is rewritten in canonical form.
    pub on_commit: Callback<()>,
}

impl<T: Clone + PartialEq + 'static> ValidatedField<T> {
    /// Value to use right now: the committed value, unless the text on
    /// screen parses to something newer.
    pub fn resolve(&self, parse: &dyn Fn(&str) -> Result<T, String>) -> T {
        parse(&self.text).unwrap_or_else(|_| self.value.clone())
    }
}

#[hook]
pub fn use_validated_field<T>(
    initial_value: T,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
) -> ValidatedField<T>
where
    T: Clone + PartialEq + std::fmt::Display + 'static,
{
    let value_handle = {
        let initial = initial_value.clone();
        use_state(move || initial)
    };
    let text_handle = use_state(move || initial_value.to_string());
    let error_handle = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let current_text = text_handle.clone();
        let value_setter = value_handle.clone();
        let error_setter = error_handle.clone();
        Callback::from(move |_| match parse_and_validate(current_text.as_str()) {
            Ok(parsed) => {
                current_text.set(parsed.to_string());
                value_setter.set(parsed);
                error_setter.set(None);
            }
            Err(msg) => error_setter.set(Some(msg)),
        })
    };

    ValidatedField {
        text: (*text_handle).clone(),
        value: (*value_handle).clone(),
        error: (*error_handle).clone(),
        on_text_input,
        on_commit,
    }
}
