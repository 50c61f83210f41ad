//! Session commands: login, admin login, register, password recovery,
//! profile updates, logout, whoami.

use ledgerline_client::AuthApi;
use ledgerline_client::models::{LoginCredentials, RegisterCredentials, SessionUser};

use super::{CliError, console};

const FORGOT_PASSWORD_FALLBACK: &str = "Failed to send reset link";
const RESET_PASSWORD_FALLBACK: &str = "Failed to reset password. Link may be expired.";
const CHANGE_PASSWORD_FALLBACK: &str = "Failed to update password";
const UPDATE_PROFILE_FALLBACK: &str = "Failed to update profile";

pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let console = console()?;
    console
        .login(&LoginCredentials::new(email, password))
        .await?;
    report_identity(&console)?;
    Ok(())
}

pub async fn admin_login(email: &str, password: &str) -> Result<(), CliError> {
    let console = console()?;
    console
        .admin_login(&LoginCredentials::new(email, password))
        .await?;
    report_identity(&console)?;
    Ok(())
}

pub async fn register(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    let console = console()?;
    console
        .register(&RegisterCredentials {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: Some(password.into()),
            role: None,
            branch: None,
        })
        .await?;
    report_identity(&console)?;
    Ok(())
}

pub async fn forgot_password(email: &str) -> Result<(), CliError> {
    let console = console()?;
    console
        .api()
        .forgot_password(email)
        .await
        .map_err(|e| CliError::Action(e.surface_message(FORGOT_PASSWORD_FALLBACK)))?;
    tracing::info!("Reset link sent to {email}.");
    Ok(())
}

pub async fn reset_password(token: &str, password: &str) -> Result<(), CliError> {
    let console = console()?;
    console
        .api()
        .reset_password(token, &password.into())
        .await
        .map_err(|e| CliError::Action(e.surface_message(RESET_PASSWORD_FALLBACK)))?;
    tracing::info!("Password reset. Sign in with the new password.");
    Ok(())
}

pub async fn change_password(current: &str, new: &str) -> Result<(), CliError> {
    let console = console()?;
    if console.session.current_user().is_none() {
        return Err(CliError::NotSignedIn);
    }
    console
        .api()
        .change_password(&current.into(), &new.into())
        .await
        .map_err(|e| CliError::Action(e.surface_message(CHANGE_PASSWORD_FALLBACK)))?;
    tracing::info!("Password updated.");
    Ok(())
}

pub async fn update_profile(name: &str, email: &str) -> Result<(), CliError> {
    let console = console()?;
    if console.session.current_user().is_none() {
        return Err(CliError::NotSignedIn);
    }
    console
        .api()
        .update_profile(name, email)
        .await
        .map_err(|e| CliError::Action(e.surface_message(UPDATE_PROFILE_FALLBACK)))?;
    tracing::info!("Profile updated.");
    Ok(())
}

pub fn logout() -> Result<(), CliError> {
    let console = console()?;
    console.logout()?;
    tracing::info!("Signed out.");
    Ok(())
}

pub fn whoami() -> Result<(), CliError> {
    let console = console()?;
    match console.session.current_user() {
        Some(user) => {
            print_user(&user);
            Ok(())
        }
        None => Err(CliError::NotSignedIn),
    }
}

fn report_identity(console: &ledgerline_client::Console) -> Result<(), CliError> {
    let user = console.session.current_user().ok_or(CliError::NotSignedIn)?;
    tracing::info!("Signed in.");
    print_user(&user);
    Ok(())
}

fn print_user(user: &SessionUser) {
    tracing::info!("  Name:  {}", user.name);
    tracing::info!("  Email: {}", user.email);
    tracing::info!("  Role:  {}", user.role);
}
