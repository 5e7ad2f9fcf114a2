//! Env file template generation example

use envsettings::{generate_env_file, load_env_params, GeneratorOptions};
use std::fs;
use tempfile::TempDir;

fn main() -> anyhow::Result<()> {
    let project = TempDir::new()?;
    fs::write(
        project.path().join("settings.py"),
        "# Database host\nDB_HOST = get_str_env_param('DB_HOST', default='localhost')\n\
         # Internal only\nBUILD_ID = get_str_env_param('BUILD_ID')\n",
    )?;
    let auth = project.path().join("modules").join("auth");
    fs::create_dir_all(&auth)?;
    fs::write(
        auth.join("settings.py"),
        "AUTH_SECRET = get_str_env_param('AUTH_SECRET', required=True)\n",
    )?;

    let env_file = project.path().join(".env");
    let options = GeneratorOptions {
        sub_modules_path: Some("modules".into()),
        include_sub_modules: Some(vec!["auth".to_string()]),
        exclude_params: vec!["BUILD_ID".to_string()],
    };
    generate_env_file(&env_file, "settings.py", project.path(), &options)?;

    println!("Generated template:\n{}", fs::read_to_string(&env_file)?);
    println!("Loaded: {}", load_env_params(&env_file));

    Ok(())
}
