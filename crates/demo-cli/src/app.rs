//! Host application: service ownership and subcommand dispatch

use crate::commands::{leaf_matches, DEFAULT_CITY};
use crate::config::AppConfig;
use crate::EXIT_REJECTED;
use anyhow::{bail, Context};
use clap::ArgMatches;
use demo_profile::{Profile, ProfileAction, ProfilePage, ProfileQuery, ProfileStats, ProfileStore};
use demo_search::{SearchQuery, SearchResult, SearchService, DEFAULT_LIMIT};
use demo_style::StyleGenerator;
use demo_weather::{WeatherReport, WeatherService, WeatherStats};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use std::sync::Arc;

/// Services owned by the host for the lifetime of the process
#[derive(Debug)]
pub struct App {
    profiles: ProfileAction,
    search: SearchService,
    weather: WeatherService,
    style: StyleGenerator,
}

impl App {
    /// Construct services from configuration
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let store = Arc::new(ProfileStore::new(config.store.clone()));
        let app = Self::from_parts(store, SearchService::new());
        match config.random.seed {
            Some(seed) => app
                .with_weather(WeatherService::with_seed(seed))
                .with_style(StyleGenerator::with_seed(seed)),
            None => app,
        }
    }

    /// Wrap already-built services; random services are seeded from the OS
    #[must_use]
    pub fn from_parts(store: Arc<ProfileStore>, search: SearchService) -> Self {
        Self {
            profiles: ProfileAction::new(store),
            search,
            weather: WeatherService::new(),
            style: StyleGenerator::new(),
        }
    }

    /// With weather service
    #[must_use]
    pub fn with_weather(mut self, weather: WeatherService) -> Self {
        self.weather = weather;
        self
    }

    /// With style generator
    #[must_use]
    pub fn with_style(mut self, style: StyleGenerator) -> Self {
        self.style = style;
        self
    }

    /// Profile store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<ProfileStore> {
        self.profiles.store()
    }

    /// Search service
    #[inline]
    #[must_use]
    pub fn search(&self) -> &SearchService {
        &self.search
    }

    /// Weather service
    #[inline]
    #[must_use]
    pub fn weather(&self) -> &WeatherService {
        &self.weather
    }

    /// Style generator
    #[inline]
    #[must_use]
    pub fn style(&self) -> &StyleGenerator {
        &self.style
    }

    /// Run the matched subcommand, writing its output to `out`
    ///
    /// Returns the process exit code.
    ///
    /// # Errors
    /// Returns an error if output cannot be written or no subcommand matched
    pub fn run(&self, matches: &ArgMatches, out: &mut dyn Write) -> anyhow::Result<u8> {
        let json = leaf_matches(matches).get_flag("json");

        match matches.subcommand() {
            Some(("profile", sub)) => self.run_profile(sub, json, out),
            Some(("stats", _)) => {
                let stats = self.store().get_stats();
                if json {
                    write_json(out, &stats)?;
                } else {
                    write_stats(out, &stats)?;
                }
                Ok(0)
            }
            Some(("search", args)) => {
                let query = SearchQuery {
                    term: args.get_one::<String>("term").cloned().unwrap_or_default(),
                    limit: args.get_one::<usize>("limit").copied().unwrap_or(DEFAULT_LIMIT),
                };
                let results = self.search.search(&query);
                if json {
                    write_json(out, &results)?;
                } else {
                    write_results(out, &results, self.search.total_query_count())?;
                }
                Ok(0)
            }
            Some(("weather", args)) => {
                let city = args.get_one::<String>("city").map_or(DEFAULT_CITY, String::as_str);
                let report = self.weather.get_weather(city);
                if json {
                    write_json(out, &report)?;
                } else {
                    write_weather(out, &report, &self.weather.stats())?;
                }
                Ok(0)
            }
            Some(("style", sub)) => self.run_style(sub, json, out),
            Some((other, _)) => bail!("unknown command '{other}'"),
            None => bail!("no command given"),
        }
    }

    fn run_profile(&self, matches: &ArgMatches, json: bool, out: &mut dyn Write) -> anyhow::Result<u8> {
        let Some((name, args)) = matches.subcommand() else {
            bail!("no profile command given");
        };
        let user = args.get_one::<String>("user").map_or("", String::as_str);

        match name {
            "show" => {
                let page = self.profiles.handle(user, &ProfileQuery::view());
                write_page(out, &page, json)?;
                Ok(0)
            }
            "update" => {
                let field = args
                    .get_one::<String>("field")
                    .context("missing --field")?;
                let value = args
                    .get_one::<String>("value")
                    .context("missing --value")?;
                let page = self.profiles.handle(user, &ProfileQuery::update(field, value));
                write_page(out, &page, json)?;
                Ok(if page.outcome.is_rejected() { EXIT_REJECTED } else { 0 })
            }
            "deactivate" => {
                let profile = self.store().set_active(user, false);
                tracing::info!(user_id = profile.id(), "Deactivated profile");
                if json {
                    write_json(out, &profile)?;
                } else {
                    write_profile(out, &profile)?;
                }
                Ok(0)
            }
            other => bail!("unknown profile command '{other}'"),
        }
    }

    fn run_style(&self, matches: &ArgMatches, json: bool, out: &mut dyn Write) -> anyhow::Result<u8> {
        let Some((kind, _)) = matches.subcommand() else {
            bail!("no style command given");
        };
        let value = match kind {
            "font" => self.style.random_font().to_string(),
            "color" => self.style.random_color().to_string(),
            "chaos" => self.style.chaos_style(),
            other => bail!("unknown style command '{other}'"),
        };
        tracing::debug!(kind, value = %value, "Generated style");

        if json {
            write_json(out, &GeneratedStyle { kind, value })?;
        } else {
            writeln!(out, "{value}")?;
        }
        Ok(0)
    }
}

#[derive(Serialize)]
struct GeneratedStyle<'a> {
    kind: &'a str,
    value: String,
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn line(out: &mut dyn Write, label: &str, value: impl Display) -> std::io::Result<()> {
    writeln!(out, "{:<16}{value}", format!("{label}:"))
}

fn write_profile(out: &mut dyn Write, p: &Profile) -> std::io::Result<()> {
    line(out, "id", p.id())?;
    line(out, "name", p.name())?;
    line(out, "email", p.email())?;
    line(out, "age", p.age())?;
    line(out, "city", p.city())?;
    line(out, "state", p.state())?;
    line(out, "country", p.country())?;
    line(out, "favorite color", p.favorite_color())?;
    line(out, "active", p.is_active())?;
    line(out, "created", p.created_at().to_rfc3339())?;
    line(out, "updated", p.updated_at().to_rfc3339())
}

fn write_stats(out: &mut dyn Write, stats: &ProfileStats) -> std::io::Result<()> {
    line(out, "profiles", stats.total_profiles)?;
    line(out, "active", stats.active_profiles)
}

fn write_page(out: &mut dyn Write, page: &ProfilePage, json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, page);
    }
    if let Some(message) = &page.message {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    write_profile(out, &page.profile)?;
    writeln!(out)?;
    write_stats(out, &page.stats)?;
    Ok(())
}

fn write_weather(out: &mut dyn Write, r: &WeatherReport, stats: &WeatherStats) -> std::io::Result<()> {
    let t = r.temperature;
    writeln!(out, "{} {}", r.condition_emoji, r.city_heading())?;
    line(out, "condition", r.condition)?;
    line(
        out,
        "temperature",
        format_args!(
            "{:.0} °C / {:.1} °F / {:.2} K / {:.2} °R",
            t.celsius, t.fahrenheit, t.kelvin, t.rankine
        ),
    )?;
    line(out, "advice", r.advice)?;
    line(out, "forecast", r.forecast)?;
    line(out, "chaos level", r.chaos_level)?;
    line(out, "source", r.source)?;
    for warning in &r.warnings {
        line(out, "warning", warning)?;
    }
    writeln!(out, "{} call(s) served", stats.api_call_count)
}

fn write_results(out: &mut dyn Write, results: &[SearchResult], total_queries: usize) -> std::io::Result<()> {
    for r in results {
        writeln!(out, "{:>3}  {}  [{}]  {}", r.id, r.title, r.category, r.description)?;
    }
    writeln!(out, "{} result(s); {total_queries} queries executed", results.len())
}
