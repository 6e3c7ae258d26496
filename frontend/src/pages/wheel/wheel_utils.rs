use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DURATION_MS: u32 = 4000;

// Winner toast
#[derive(Properties, PartialEq)]
pub struct WinnerToastProps {
    pub winner: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component(WinnerToast)]
pub fn winner_toast(props: &WinnerToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.winner.clone(), move |winner| {
            let timeout = winner
                .as_ref()
                .map(|_| Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(())));
            move || drop(timeout)
        });
    }

    let Some(winner) = &props.winner else {
        return html! {};
    };

    html! {
        <div class="fixed top-6 left-1/2 -translate-x-1/2 z-50">
            <div class={classes!(
                "flex",
                "items-center",
                "gap-3",
                "px-6",
                "py-4",
                "rounded-xl",
                "bg-gradient-to-r",
                "from-yellow-400",
                "to-orange-500",
                "text-white",
                "font-bold",
                "text-xl",
                "shadow-lg",
                "border-2",
                "border-yellow-300",
                "animate-bounce"
            )}>
                <span>{"🎉"}</span>
                <span>{format!("We are playing: {}", winner)}</span>
                <span>{"🎉"}</span>
            </div>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub has_options: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning..."
    } else if !props.has_options {
        "Add an option"
    } else {
        "SPIN"
    };

    let is_disabled = props.is_spinning || !props.has_options;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class={classes!(
                    "relative",
                    "w-full",
                    "px-8",
                    "py-4",
                    "font-bold",
                    "text-lg",
                    "transition-all",
                    "duration-300",
                    "focus:outline-none",
                    "focus:ring-4",
                    "focus:ring-yellow-300",
                    "bg-transparent",
                )}
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}
