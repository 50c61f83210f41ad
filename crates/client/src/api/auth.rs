//! Authentication endpoints.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use ledgerline_core::UserRole;

use super::{ApiClient, AuthApi};
use crate::error::ApiError;
use crate::models::{LoginCredentials, RegisterCredentials, SessionUser};

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionUser, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.post_json(
            "auth/login",
            &Body {
                email: &credentials.email,
                password: credentials.password.expose_secret(),
            },
        )
        .await
    }

    async fn admin_login(&self, credentials: &LoginCredentials) -> Result<SessionUser, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.post_json(
            "auth/admin-login",
            &Body {
                email: &credentials.email,
                password: credentials.password.expose_secret(),
            },
        )
        .await
    }

    async fn register(&self, credentials: &RegisterCredentials) -> Result<SessionUser, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            first_name: &'a str,
            last_name: &'a str,
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            password: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            role: Option<UserRole>,
            #[serde(skip_serializing_if = "Option::is_none")]
            branch: Option<&'a str>,
        }

        self.post_json(
            "auth/register",
            &Body {
                first_name: &credentials.first_name,
                last_name: &credentials.last_name,
                email: &credentials.email,
                password: credentials
                    .password
                    .as_ref()
                    .map(ExposeSecret::expose_secret),
                role: credentials.role,
                branch: credentials.branch.as_ref().map(|b| b.as_str()),
            },
        )
        .await
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
        }

        self.post_json::<_, serde_json::Value>("auth/forgotpassword", &Body { email })
            .await?;
        Ok(())
    }

    async fn reset_password(&self, token: &str, password: &SecretString) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            password: &'a str,
        }

        self.put_json::<_, serde_json::Value>(
            &format!("auth/resetpassword/{token}"),
            &Body {
                password: password.expose_secret(),
            },
        )
        .await?;
        Ok(())
    }

    async fn change_password(
        &self,
        current: &SecretString,
        new: &SecretString,
    ) -> Result<(), ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            current_password: &'a str,
            new_password: &'a str,
        }

        self.put_json::<_, serde_json::Value>(
            "auth/password",
            &Body {
                current_password: current.expose_secret(),
                new_password: new.expose_secret(),
            },
        )
        .await?;
        Ok(())
    }

    async fn update_profile(&self, name: &str, email: &str) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
            email: &'a str,
        }

        self.put_json::<_, serde_json::Value>("auth/profile", &Body { name, email })
            .await?;
        Ok(())
    }
}
