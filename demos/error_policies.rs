//! Error handling policy example

use envsettings::{
    configure, get_int_env_param, reset_config, ConfigOptions, ErrorHandling, TerminateExt,
};

fn main() -> anyhow::Result<()> {
    std::env::set_var("WORKERS", "many");

    // Default policy: the error is returned to the caller
    match get_int_env_param("WORKERS", None, false) {
        Ok(value) => println!("raise: {value:?}"),
        Err(e) => println!("raise: error returned: {e}"),
    }

    // Print the message to stderr and carry on without a value
    configure(
        ConfigOptions::new()
            .error_handling(ErrorHandling::Print)
            .message("err_integer", "WORKERS must be a number: %s=%s"),
    );
    println!("print: {:?}", get_int_env_param("WORKERS", None, false)?);

    // Stay silent
    configure(ConfigOptions::new().try_error_handling("ignore")?);
    println!("ignore: {:?}", get_int_env_param("WORKERS", None, false)?);

    // Exit the process on the first invalid parameter
    reset_config();
    configure(ConfigOptions::new().error_handling(ErrorHandling::Exit));
    std::env::set_var("WORKERS", "8");
    let workers = get_int_env_param("WORKERS", None, true).or_terminate()?;
    println!("exit: {workers:?}");

    Ok(())
}
