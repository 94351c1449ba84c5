use std::time::Duration;

use clap::Parser;
use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use reqwest::Result;
use serde::Deserialize;

const GENERATE_ERROR: &str = "Error generating name. Please try again.";
const RETRIEVE_ERROR: &str = "Error retrieving name. Please try again.";
const COUNT_ERROR: &str = "Error retrieving database information.";
const INVALID_RETRIEVE_INPUT: &str = "Invalid input. Enter either a number (index) or a single letter.";
const INDEX_PRIORITY: &str = "You entered both a letter and a number. Retrieving by index.";
const NO_NAME_FOUND: &str = "No name found.";

/// Command line / environment settings for the UI.
#[derive(Parser, Debug)]
#[command(author, version, about = "Desktop client for the names API", long_about = None)]
struct Cli {
    /// Base URL of the names API
    #[arg(long, env = "API_URL", default_value = "http://127.0.0.1:8080")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,
}

#[derive(Deserialize)]
struct GeneratedName {
    generated_name: String,
}

#[derive(Deserialize)]
struct Count {
    count: u64,
}

/// `name` is absent when the API answers with an error field instead.
#[derive(Deserialize)]
struct Retrieved {
    name: Option<String>,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a POST request to `/generate_name` with query parameters.
    fn generate_name(&self, params: &[(&str, String)]) -> Result<String> {
        let response: GeneratedName = self.client
            .post(self.url("/generate_name"))
            .query(params)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.generated_name)
    }

    /// Sends a GET request to `/count_names`.
    fn count_names(&self) -> Result<u64> {
        let response: Count = self.client
            .get(self.url("/count_names"))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.count)
    }

    /// Sends a GET request to `/retrieve_name` with query parameters.
    fn retrieve_name(&self, params: &[(&str, String)]) -> Result<Option<String>> {
        let response: Retrieved = self.client
            .get(self.url("/retrieve_name"))
            .query(params)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.name)
    }
}

/// Builds the `/generate_name` query from the raw form fields.
///
/// - An empty first letter is not sent
/// - The length is only sent when it is made of ASCII digits
fn generate_query(first_letter: &str, length: &str) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !first_letter.is_empty() {
        params.push(("first_letter", first_letter.to_owned()));
    }
    if !length.is_empty()
        && length.chars().all(|c| c.is_ascii_digit())
        && let Ok(length) = length.parse::<usize>()
    {
        params.push(("length", length.to_string()));
    }
    params
}

/// What the retrieve field asks for.
#[derive(Debug, PartialEq)]
enum RetrieveQuery {
    /// Nothing typed: the API picks a random name.
    Random,
    /// `letters_ignored` is set when letters were typed next to the number.
    Index { index: u64, letters_ignored: bool },
    FirstLetter(char),
}

impl RetrieveQuery {
    /// Splits the free-text input into letters and digits.
    ///
    /// Digits win over letters. A lone letter selects by first letter.
    /// Anything else is rejected before any request is made.
    fn parse(input: &str) -> std::result::Result<Self, &'static str> {
        if input.is_empty() {
            return Ok(RetrieveQuery::Random);
        }

        let letters: Vec<char> = input.chars().filter(|c| c.is_alphabetic()).collect();
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        if !digits.is_empty() {
            let index = digits.parse::<u64>().map_err(|_| INVALID_RETRIEVE_INPUT)?;
            return Ok(RetrieveQuery::Index { index, letters_ignored: !letters.is_empty() });
        }

        match letters.as_slice() {
            [letter] => Ok(RetrieveQuery::FirstLetter(*letter)),
            _ => Err(INVALID_RETRIEVE_INPUT),
        }
    }

    /// Query parameters for `/retrieve_name`.
    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            RetrieveQuery::Random => Vec::new(),
            RetrieveQuery::Index { index, .. } => vec![("index", index.to_string())],
            RetrieveQuery::FirstLetter(letter) => vec![("first_letter", letter.to_string())],
        }
    }

    /// Informational note to show next to the result.
    fn message(&self) -> Option<&'static str> {
        match self {
            RetrieveQuery::Index { letters_ignored: true, .. } => Some(INDEX_PRIORITY),
            _ => None,
        }
    }
}

/// Global UI state (MUST persist between frames in egui).
struct NamesUI {
    rest: RESTContext,

    first_letter: String,
    length: String,
    generated: Option<std::result::Result<String, String>>,

    count: Option<u64>,

    retrieve_input: String,
    retrieved: Option<std::result::Result<String, String>>,
    retrieve_message: Option<&'static str>,
}

impl NamesUI {
    /// Initializes the UI and fetches the current count.
    fn new(cli: &Cli) -> Result<Self> {
        let mut ui = Self {
            rest: RESTContext::new(&cli.api_url, Duration::from_secs(cli.timeout_secs))?,

            first_letter: String::new(),
            length: String::new(),
            generated: None,

            count: None,

            retrieve_input: String::new(),
            retrieved: None,
            retrieve_message: None,
        };
        ui.refresh_count();
        Ok(ui)
    }

    /// Performs the generation request.
    fn generate_name(&mut self) {
        let params = generate_query(&self.first_letter, &self.length);
        self.generated = Some(match self.rest.generate_name(&params) {
            Ok(name) => Ok(format!("Generated Name: {name}")),
            Err(e) => {
                log::warn!("generate_name failed: {e}");
                Err(GENERATE_ERROR.to_owned())
            }
        });
        self.refresh_count();
    }

    /// Performs the count request.
    fn refresh_count(&mut self) {
        self.count = match self.rest.count_names() {
            Ok(count) => Some(count),
            Err(e) => {
                log::warn!("count_names failed: {e}");
                None
            }
        };
    }

    /// Performs the retrieve request, unless the input is invalid.
    fn retrieve_name(&mut self) {
        self.retrieve_message = None;
        let query = match RetrieveQuery::parse(&self.retrieve_input) {
            Ok(query) => query,
            Err(e) => {
                self.retrieved = Some(Err(e.to_owned()));
                return;
            }
        };

        self.retrieved = Some(match self.rest.retrieve_name(&query.params()) {
            Ok(name) => {
                self.retrieve_message = query.message();
                Ok(format!("Retrieved Name: {}", name.as_deref().unwrap_or(NO_NAME_FOUND)))
            }
            Err(e) => {
                log::warn!("retrieve_name failed: {e}");
                Err(RETRIEVE_ERROR.to_owned())
            }
        });
    }
}

fn show_outcome(ui: &mut egui::Ui, outcome: &Option<std::result::Result<String, String>>) {
    match outcome {
        Some(Ok(text)) => {
            ui.colored_label(egui::Color32::DARK_GREEN, text);
        }
        Some(Err(text)) => {
            ui.colored_label(egui::Color32::RED, text);
        }
        None => {}
    }
}

impl eframe::App for NamesUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("What's in a Name?");
            ui.label("Need a name for your child, plant or pet tarantula? This app is here to help!");
            ui.separator();

            // Generation
            ui.heading("Generate a New Name");
            egui::Grid::new("generate_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    ui.label("First letter (optional)");
                    ui.text_edit_singleline(&mut self.first_letter);
                    ui.end_row();

                    ui.label("Name length (optional)");
                    ui.text_edit_singleline(&mut self.length);
                    ui.end_row();
                });
            if ui.add_sized([200.0, 30.0], egui::Button::new("Generate Name")).clicked() {
                self.generate_name();
            }
            show_outcome(ui, &self.generated);
            ui.separator();

            // Database information
            ui.heading("Database Information");
            ui.horizontal(|ui| {
                match self.count {
                    Some(count) => ui.label(format!("Total names stored in the database: {count}")),
                    None => ui.colored_label(egui::Color32::RED, COUNT_ERROR),
                };
                if ui.button("Refresh").clicked() {
                    self.refresh_count();
                }
            });
            ui.separator();

            // Retrieval
            ui.heading("Retrieve a Stored Name");
            ui.label("Enter a first letter or a row number to see a name from the database.");
            ui.label("If both are entered, the number will be used. Leave the field blank for a random name!");
            ui.text_edit_singleline(&mut self.retrieve_input);
            if ui.add_sized([200.0, 30.0], egui::Button::new("Retrieve Name")).clicked() {
                self.retrieve_name();
            }
            show_outcome(ui, &self.retrieved);
            if let Some(message) = self.retrieve_message {
                ui.label(message);
            }
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "rs-names",
        options,
        Box::new(move |_| Ok(Box::new(NamesUI::new(&cli)?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_asks_for_a_random_name() {
        let query = RetrieveQuery::parse("").unwrap();
        assert_eq!(query, RetrieveQuery::Random);
        assert!(query.params().is_empty());
    }

    #[test]
    fn digits_select_by_index() {
        let query = RetrieveQuery::parse("12").unwrap();
        assert_eq!(query, RetrieveQuery::Index { index: 12, letters_ignored: false });
        assert_eq!(query.params(), vec![("index", "12".to_owned())]);
        assert_eq!(query.message(), None);
    }

    #[test]
    fn digits_win_over_letters_with_a_note() {
        let query = RetrieveQuery::parse("b3").unwrap();
        assert_eq!(query, RetrieveQuery::Index { index: 3, letters_ignored: true });
        assert_eq!(query.message(), Some(INDEX_PRIORITY));
    }

    #[test]
    fn single_letter_selects_by_first_letter() {
        let query = RetrieveQuery::parse(" k ").unwrap();
        assert_eq!(query, RetrieveQuery::FirstLetter('k'));
        assert_eq!(query.params(), vec![("first_letter", "k".to_owned())]);
    }

    #[test]
    fn other_inputs_are_rejected() {
        assert_eq!(RetrieveQuery::parse("ab"), Err(INVALID_RETRIEVE_INPUT));
        assert_eq!(RetrieveQuery::parse("?!"), Err(INVALID_RETRIEVE_INPUT));
        assert_eq!(RetrieveQuery::parse("99999999999999999999999"), Err(INVALID_RETRIEVE_INPUT));
    }

    #[test]
    fn generate_query_skips_empty_and_non_numeric_fields() {
        assert!(generate_query("", "").is_empty());
        assert_eq!(generate_query("t", "abc"), vec![("first_letter", "t".to_owned())]);
        assert_eq!(generate_query("", "-4"), Vec::<(&str, String)>::new());
        assert_eq!(
            generate_query("bl", "7"),
            vec![("first_letter", "bl".to_owned()), ("length", "7".to_owned())]
        );
    }
}
