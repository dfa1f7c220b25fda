use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use forecast_core::{App, Config, Metric, Pipeline, RequestState, TemperatureUnit};
use inquire::{Select, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Hourly forecast viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Temperature,
    Windspeed,
    Precipitation,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Temperature => Metric::Temperature,
            MetricArg::Windspeed => Metric::WindSpeed,
            MetricArg::Precipitation => Metric::Precipitation,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitArg> for TemperatureUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Celsius => TemperatureUnit::Celsius,
            UnitArg::Fahrenheit => TemperatureUnit::Fahrenheit,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the next ten hourly readings for a city, then exit.
    Show {
        /// City name; falls back to the configured default.
        city: Option<String>,

        /// Forecast metric to display.
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,

        /// Temperature display unit (only affects the temperature metric).
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
    },

    /// Interactive shell: change city or metric, toggle units, refresh.
    Interactive,

    /// Edit and persist the startup defaults.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        tracing::debug!(city = %config.default_city, "Loaded configuration");

        match self.command {
            Command::Show { city, metric, unit } => show(&config, city, metric, unit).await,
            Command::Interactive => interactive(&config).await,
            Command::Configure => configure(config),
        }
    }
}

async fn show(
    config: &Config,
    city: Option<String>,
    metric: Option<MetricArg>,
    unit: Option<UnitArg>,
) -> anyhow::Result<()> {
    let city = city.unwrap_or_else(|| config.default_city.clone());
    let metric = metric.map_or(config.default_metric, Metric::from);
    let unit = unit.map_or(config.default_unit, TemperatureUnit::from);

    let mut app = App::new(Pipeline::from_config(config)?, city, metric, unit);

    println!("{}", render::LOADING_MESSAGE);
    app.refresh().await;

    match &app.state().request {
        RequestState::Failure(message) => anyhow::bail!("{message}"),
        _ => {
            println!("{}", render::render(app.state()));
            Ok(())
        }
    }
}

async fn interactive(config: &Config) -> anyhow::Result<()> {
    const UPDATE_CITY: &str = "Update city";
    const CHANGE_METRIC: &str = "Change metric";
    const TOGGLE_UNIT: &str = "Toggle unit";
    const REFRESH: &str = "Refresh";
    const QUIT: &str = "Quit";

    let mut app = App::from_config(config)?;

    println!("{}", render::LOADING_MESSAGE);
    app.refresh().await;
    println!("{}", render::render(app.state()));

    loop {
        let mut actions = vec![UPDATE_CITY, CHANGE_METRIC];
        // The unit toggle only appears while temperature is active.
        if app.state().metric == Metric::Temperature {
            actions.push(TOGGLE_UNIT);
        }
        actions.push(REFRESH);
        actions.push(QUIT);

        let action = Select::new("Action:", actions).prompt()?;

        match action {
            UPDATE_CITY => {
                let city = Text::new("City:")
                    .with_initial_value(&app.state().city)
                    .prompt()?;
                println!("{}", render::LOADING_MESSAGE);
                app.set_city(city).await;
            }
            CHANGE_METRIC => {
                let metric = Select::new("Metric:", Metric::all().to_vec()).prompt()?;
                println!("{}", render::LOADING_MESSAGE);
                app.set_metric(metric).await;
            }
            TOGGLE_UNIT => {
                app.set_unit(app.state().unit.toggled());
            }
            REFRESH => {
                println!("{}", render::LOADING_MESSAGE);
                app.refresh().await;
            }
            QUIT => break,
            _ => unreachable!("unknown action"),
        }

        println!("{}", render::render(app.state()));
    }

    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    config.default_city = Text::new("Default city:")
        .with_initial_value(&config.default_city)
        .prompt()?;

    config.default_metric = Select::new("Default metric:", Metric::all().to_vec()).prompt()?;

    if config.default_metric == Metric::Temperature {
        config.default_unit =
            Select::new("Default temperature unit:", TemperatureUnit::all().to_vec()).prompt()?;
    }

    config.save()?;

    let path = Config::config_file_path().context("Failed to locate config file")?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
