//! Fetches one parameter and prints its value.
//!
//! ```sh
//! SSM_ENDPOINT=http://localhost:8080/ cargo run --example get_parameter -- /app/db-password
//! ```

use ssm_client::{GetParameterRequest, SsmClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::args()
        .nth(1)
        .ok_or("usage: get_parameter <name>")?;

    let builder = match std::env::var("SSM_ENDPOINT") {
        Ok(endpoint) => SsmClient::builder(endpoint)?,
        Err(_) => {
            let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
            SsmClient::builder_for_region(&region)?
        }
    };
    let client = builder.build()?;

    let result = client.get_parameter(
        &GetParameterRequest::default()
            .with_name(&name)
            .with_with_decryption(true),
    )?;

    match result.parameter {
        Some(parameter) => {
            println!(
                "{} (version {}): {}",
                parameter.name.as_deref().unwrap_or(&name),
                parameter.version.unwrap_or(0),
                parameter.value.as_deref().unwrap_or("")
            );
        }
        None => println!("no parameter in response"),
    }
    Ok(())
}
