use clap::Args;
use serde_json::json;

use crate::auth::{self, Claims};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Debug, Args)]
pub struct TokenArgs {
    #[arg(long, help = "User id the token acts as")]
    pub id: i64,
    #[arg(long, help = "Role id carried by the token (2 = administrator)")]
    pub role: i64,
}

pub fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let claims = Claims::new(args.id, args.role)?;
    let token = auth::generate_jwt(&claims)?;

    match output_format {
        OutputFormat::Json => output_success(
            &output_format,
            "Token generated",
            Some(json!({ "token": token, "expires_at": claims.exp })),
        ),
        // Bare token so it can be captured by a shell
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
    }
}
