//! Login, registration, and logout

use crate::error::CliResult;
use crate::output::{print_info, print_success};
use dialoguer::{Input, Password};
use teamup_client::{api, NotifyingClient};
use teamup_session::SessionStore;
use teamup_types::{LoginRequest, RegisterRequest};

/// Sign in and persist the login state.
pub async fn login(
    client: &NotifyingClient,
    store: &dyn SessionStore,
    account: Option<String>,
) -> CliResult<()> {
    let account: String = match account {
        Some(account) => account,
        None => Input::new().with_prompt("Account").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let user = api::user::login(
        client,
        &LoginRequest {
            user_account: account,
            user_password: password,
        },
    )
    .await?;

    // The persisted login state is the sanitized user; its presence is what
    // the navigation guard reads.
    store.set_token(&serde_json::to_string(&user)?)?;
    print_success(&format!("Logged in as {}", user.username));
    Ok(())
}

/// Create an account.
pub async fn register(client: &NotifyingClient, account: Option<String>) -> CliResult<()> {
    let account: String = match account {
        Some(account) => account,
        None => Input::new().with_prompt("Account").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "passwords do not match")
        .interact()?;
    let planet_code: String = Input::new()
        .with_prompt("Planet code (optional)")
        .allow_empty(true)
        .interact_text()?;

    let request = RegisterRequest {
        user_account: account.clone(),
        user_password: password.clone(),
        check_password: password,
        planet_code: (!planet_code.is_empty()).then_some(planet_code),
    };
    let id = api::user::register(client, &request).await?;

    print_success(&format!("Registered {account} (user id {id})"));
    print_info("log in with `teamup login`");
    Ok(())
}

/// Tear down the backend session and clear the persisted login state.
pub async fn logout(client: &NotifyingClient, store: &dyn SessionStore) -> CliResult<()> {
    // Local state clears even when the backend call fails.
    let _ = api::user::logout(client).await;
    store.clear()?;
    print_success("Logged out");
    Ok(())
}
