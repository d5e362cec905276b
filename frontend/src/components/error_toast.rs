use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct ErrorToastProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Transient error banner. The page owns visibility and the auto-hide
/// timer; this only renders the message and reports the close click.
#[function_component(ErrorToast)]
pub fn error_toast(props: &ErrorToastProps) -> Html {
    let ErrorToastProps {
        message,
        on_dismiss,
    } = props.clone();
    let onclick = Callback::from(move |_| on_dismiss.emit(()));

    html! {
        <div class="error-toast">
            <span class="error-message">{ message }</span>
            <button class="toast-close" onclick={onclick}>{ "✕" }</button>
        </div>
    }
}
