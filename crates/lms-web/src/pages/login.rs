//! Login page

use crate::components::Banner;
use leptos::*;

/// Admin login form
///
/// The rejection message belongs to this view: the session store returns it,
/// the login action threads it back here, and it stays visible until the
/// next attempt.
#[component]
pub fn LoginPage(
    /// Message from the last failed attempt
    error: Option<String>,
    /// Email entered on the last attempt, so the form stays filled
    email: String,
) -> impl IntoView {
    view! {
        <div class="login-screen">
            <div class="login-card">
                <h1>"ADMIN Login"</h1>
                {error.map(|message| view! { <Banner kind="error".to_string() message=message/> })}
                <form method="post" action="/login">
                    <div class="form-field">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value=email
                            placeholder="Enter your email"
                            required=true
                        />
                    </div>
                    <div class="form-field">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            required=true
                        />
                    </div>
                    <button class="btn btn-primary" type="submit">"Sign in"</button>
                </form>
            </div>
        </div>
    }
}
