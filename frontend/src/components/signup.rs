use bookify::AppRoute;
use bookify::auth::{self as flows, SIGNUP_SUCCESS, SignupForm};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{session_store, use_api, use_config};
use crate::components::icons::{ArrowRight, Mail, UserIcon, UserPlus};
use crate::components::login::{FormAlert, FormMessage, PasswordInput, redirect_delay_ms};
use crate::web::router::{hard_navigate, use_router};

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = use_config();
    let delay_ms = redirect_delay_ms(config.auth_redirect_delay);
    let api = StoredValue::new(use_api());
    let store = StoredValue::new(session_store(&config));
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (message, set_message) = signal(FormMessage::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(msg) = form.validate() {
            set_message.set(Some((msg.to_string(), false)));
            return;
        }

        set_is_submitting.set(true);
        set_message.set(None);

        let api = api.get_value();
        let store = store.get_value();
        spawn_local(async move {
            match flows::signup(&api, &store, &form).await {
                Ok(session) => {
                    log::info!("account created for {}", session.user.username);
                    set_message.try_set(Some((SIGNUP_SUCCESS.to_string(), true)));
                    TimeoutFuture::new(delay_ms).await;
                    hard_navigate(AppRoute::auth_success_redirect());
                }
                Err(msg) => {
                    set_message.try_set(Some((msg, false)));
                    set_is_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-secondary/10 rounded-2xl text-secondary">
                            <UserPlus attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Create Account"</h1>
                        <p class="text-base-content/70">"Join Bookify and start your library"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <FormAlert message=message />

                        <div class="form-control">
                            <label class="input input-bordered flex items-center gap-2">
                                <UserIcon attr:class="h-4 w-4 opacity-60" />
                                <input
                                    class="grow"
                                    type="text"
                                    placeholder="Choose a username"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                />
                            </label>
                        </div>
                        <div class="form-control">
                            <label class="input input-bordered flex items-center gap-2">
                                <Mail attr:class="h-4 w-4 opacity-60" />
                                <input
                                    class="grow"
                                    type="email"
                                    placeholder="Enter your email"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                />
                            </label>
                        </div>
                        <div class="form-control">
                            <PasswordInput value=password set_value=set_password placeholder="Create a password" />
                        </div>
                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-secondary gap-2" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating Account..." }.into_any()
                                } else {
                                    view! { "Create Account" <ArrowRight attr:class="h-5 w-5" /> }.into_any()
                                }}
                            </button>
                        </div>

                        <div class="divider text-base-content/50">"or"</div>

                        <p class="text-center text-sm text-base-content/70">"Already have an account?"</p>
                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| router.navigate(AppRoute::Login.to_path())
                        >
                            "Sign In"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
