//! Runs a shell command on an instance and prints the command id.
//!
//! ```sh
//! SSM_ENDPOINT=http://localhost:8080/ cargo run --example send_command -- i-0abc123 uptime
//! ```

use ssm_client::{SendCommandRequest, SsmClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let instance_id = args.next().ok_or("usage: send_command <instance-id> <command>")?;
    let command_line = args.collect::<Vec<_>>().join(" ");
    if command_line.is_empty() {
        return Err("usage: send_command <instance-id> <command>".into());
    }

    let builder = match std::env::var("SSM_ENDPOINT") {
        Ok(endpoint) => SsmClient::builder(endpoint)?,
        Err(_) => {
            let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
            SsmClient::builder_for_region(&region)?
        }
    };
    let client = builder.build()?;

    let request = SendCommandRequest::default()
        .with_document_name("AWS-RunShellScript")
        .with_instance_ids([instance_id])
        .add_parameters_entry("commands", vec![command_line])?;
    let result = client.send_command(&request)?;

    match result.command {
        Some(command) => println!(
            "command {} is {}",
            command.command_id.as_deref().unwrap_or("?"),
            command.status.as_deref().unwrap_or("unknown")
        ),
        None => println!("no command in response"),
    }
    Ok(())
}
