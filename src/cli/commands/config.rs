use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        database,
    } = cmd
    {
        if *database {
            ConfigLogic::print_database(cfg);
        }

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(&Config::config_file(), editor)?;
        }

        // nessun flag → mostra la configurazione
        if !*database && !*print_config && !*edit_config {
            ConfigLogic::print(cfg)?;
        }
    }

    Ok(())
}
