//! Basic usage example

use envsettings::{
    get_bool_env_param, get_float_env_param, get_int_env_param, get_str_env_param,
};

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("RATIO", "0,75");
    std::env::set_var("DEBUG_MODE", "yes");

    // Required parameter
    let database_url = get_str_env_param("DATABASE_URL", None, true)?;

    // With default value
    let max_connections = get_int_env_param("MAX_CONNECTIONS", Some(10), false)?;

    // Decimal comma is accepted
    let ratio = get_float_env_param("RATIO", None, false)?;

    // Boolean type
    let debug_mode = get_bool_env_param("DEBUG_MODE", Some(false), false)?;

    println!("Configuration loaded:");
    println!("  Database URL: {database_url:?}");
    println!("  Max Connections: {max_connections:?}");
    println!("  Ratio: {ratio:?}");
    println!("  Debug Mode: {debug_mode:?}");

    Ok(())
}
