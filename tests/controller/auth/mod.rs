mod login;
mod me;
mod register;

use bubble::{
    model::auth::{LoginDto, RegisterDto},
    server::controller::auth::{login, me, register},
};

use super::*;

fn registration(email: &str, username: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        username: username.to_string(),
        password: "Secret123".to_string(),
        full_name: "Alice Liddell".to_string(),
    }
}
