use iced::{event, time, window, Element, Event, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::sleep;

mod api;
mod config;
mod error;
mod state;
mod ui;

use api::{ComparisonResult, HttpBackend, InferenceBackend, PredictionResult};
use config::{Config, API_BASE_URL_ENV};
use error::AppError;
use state::comparator::{ComparatorForm, SlotKey};
use state::predictor::PredictorForm;
use state::slot::{self, LoadedImage};

/// Cadence of the synthetic progress ticks while a request is in flight.
const PROGRESS_TICK: Duration = Duration::from_millis(200);
/// How long a finished progress bar lingers before resetting to 0.
const PROGRESS_SETTLE_DELAY: Duration = Duration::from_secs(1);
/// How long a transient error message stays on screen.
const ERROR_DISMISS_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Predictor,
    Dashboard,
}

/// Which form a delayed timer message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormId {
    Predictor,
    Comparator,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),

    // Single-image predictor
    PredictorPick,
    PredictorLoaded(Result<LoadedImage, AppError>),
    PredictorSubmit,
    PredictorFinished(Result<PredictionResult, AppError>),

    // Four-image comparator
    ComparatorPick(SlotKey),
    ComparatorLoaded(SlotKey, Result<LoadedImage, AppError>),
    ComparatorSubmit,
    ComparatorFinished(Result<ComparisonResult, AppError>),
    ComparatorClear,

    // Timers
    ProgressTick,
    ProgressSettled(FormId, u64),
    ErrorDismissed(FormId, u64),

    // Drag-and-drop
    FilesHovered,
    FileDropped(PathBuf),
    HoverCleared,
}

/// Main application state
struct PawMatch {
    screen: Screen,
    config: Config,
    backend: HttpBackend,
    predictor: PredictorForm,
    comparator: ComparatorForm,
    /// Armed on hover, consumed by the first dropped file of a gesture.
    /// Extra files in the same drop are ignored.
    drop_armed: bool,
}

impl PawMatch {
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();

        match &config.api_base_url {
            Some(url) => println!("🐶 PawMatch ready. Compare backend: {url}"),
            None => eprintln!(
                "⚠️  {API_BASE_URL_ENV} is not set; the comparator cannot submit."
            ),
        }

        (
            PawMatch {
                screen: Screen::Home,
                config,
                backend: HttpBackend::new(),
                predictor: PredictorForm::default(),
                comparator: ComparatorForm::default(),
                drop_armed: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                self.screen = screen;
                Task::none()
            }

            // ========== Predictor ==========
            Message::PredictorPick => match pick_image_file() {
                Some(path) => Task::perform(slot::load_image(path), Message::PredictorLoaded),
                None => Task::none(),
            },
            Message::PredictorLoaded(Ok(loaded)) => {
                self.predictor.accept(loaded);
                Task::none()
            }
            Message::PredictorLoaded(Err(error)) => self.flash_error(FormId::Predictor, &error),
            Message::PredictorSubmit => match self.predictor.build_request() {
                Ok(request) => {
                    self.predictor.begin_submit();
                    println!("📤 Predicting {}", request.image.filename);

                    let backend = self.backend.clone();
                    Task::perform(
                        async move { backend.predict(request).await },
                        Message::PredictorFinished,
                    )
                }
                Err(error) => self.flash_error(FormId::Predictor, &error),
            },
            Message::PredictorFinished(outcome) => {
                self.predictor.in_flight = false;
                match &outcome {
                    Ok(_) => self.predictor.progress.finish(),
                    Err(_) => self.predictor.progress.abandon(),
                }
                let settle = self.settle_progress(FormId::Predictor);

                match outcome {
                    Ok(result) => {
                        println!("✅ Prediction received");
                        self.predictor.result = Some(result);
                        settle
                    }
                    Err(error) => {
                        Task::batch([settle, self.flash_error(FormId::Predictor, &error)])
                    }
                }
            }

            // ========== Comparator ==========
            Message::ComparatorPick(key) => match pick_image_file() {
                Some(path) => Task::perform(slot::load_image(path), move |outcome| {
                    Message::ComparatorLoaded(key, outcome)
                }),
                None => Task::none(),
            },
            Message::ComparatorLoaded(key, Ok(loaded)) => {
                self.comparator.accept(key, loaded);
                Task::none()
            }
            Message::ComparatorLoaded(_, Err(error)) => {
                self.flash_error(FormId::Comparator, &error)
            }
            Message::ComparatorSubmit => match self.comparator.build_request(&self.config) {
                Ok(request) => {
                    self.comparator.begin_submit();
                    println!("📤 Comparing 2 pairs (4 images)...");

                    let backend = self.backend.clone();
                    Task::perform(
                        async move { api::submit_comparison(&backend, request).await },
                        Message::ComparatorFinished,
                    )
                }
                Err(error) => self.flash_error(FormId::Comparator, &error),
            },
            Message::ComparatorFinished(outcome) => {
                self.comparator.in_flight = false;
                match &outcome {
                    Ok(_) => self.comparator.progress.finish(),
                    Err(_) => self.comparator.progress.abandon(),
                }
                let settle = self.settle_progress(FormId::Comparator);

                match outcome {
                    Ok(result) => {
                        println!(
                            "✅ Comparison done: {} / {}",
                            result.pair1.match_status, result.pair2.match_status
                        );
                        self.comparator.result = Some(result);
                        settle
                    }
                    Err(error) => {
                        Task::batch([settle, self.flash_error(FormId::Comparator, &error)])
                    }
                }
            }
            Message::ComparatorClear => {
                if !self.comparator.in_flight {
                    self.comparator.clear_all();
                }
                Task::none()
            }

            // ========== Timers ==========
            Message::ProgressTick => {
                // tick() is a no-op on a form that is not in flight
                self.predictor.progress.tick();
                self.comparator.progress.tick();
                Task::none()
            }
            Message::ProgressSettled(form, run) => {
                match form {
                    FormId::Predictor => self.predictor.progress.settle(run),
                    FormId::Comparator => self.comparator.progress.settle(run),
                }
                Task::none()
            }
            Message::ErrorDismissed(form, seq) => {
                match form {
                    FormId::Predictor => self.predictor.dismiss_error(seq),
                    FormId::Comparator => self.comparator.dismiss_error(seq),
                }
                Task::none()
            }

            // ========== Drag-and-drop ==========
            Message::FilesHovered => {
                self.drop_armed = true;
                Task::none()
            }
            Message::HoverCleared => {
                self.drop_armed = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                if !self.drop_armed {
                    return Task::none();
                }
                self.drop_armed = false;

                match self.screen {
                    Screen::Predictor => {
                        Task::perform(slot::load_image(path), Message::PredictorLoaded)
                    }
                    Screen::Dashboard => match self.comparator.first_empty_slot() {
                        Some(key) => Task::perform(slot::load_image(path), move |outcome| {
                            Message::ComparatorLoaded(key, outcome)
                        }),
                        None => self.flash_error(
                            FormId::Comparator,
                            &AppError::validation("All four slots are filled. Clear to replace."),
                        ),
                    },
                    Screen::Home => Task::none(),
                }
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.screen {
            Screen::Home => ui::home::view(),
            Screen::Predictor => ui::predictor::view(&self.predictor),
            Screen::Dashboard => ui::dashboard::view(&self.comparator),
        }
    }

    /// The progress ticker only exists while a request is in flight, so it
    /// cannot outlive the request it animates.
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![event::listen_with(handle_event)];

        if self.predictor.progress.is_ticking() || self.comparator.progress.is_ticking() {
            subscriptions.push(time::every(PROGRESS_TICK).map(|_| Message::ProgressTick));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Show a transient error on the given form and arm its dismiss timer.
    fn flash_error(&mut self, form: FormId, error: &AppError) -> Task<Message> {
        eprintln!("⚠️  {error}");

        let seq = match form {
            FormId::Predictor => self.predictor.show_error(error.to_string()),
            FormId::Comparator => self.comparator.show_error(error.to_string()),
        };

        Task::perform(sleep(ERROR_DISMISS_DELAY), move |_| {
            Message::ErrorDismissed(form, seq)
        })
    }

    /// Arm the timer that resets a finished (or abandoned) progress bar.
    fn settle_progress(&mut self, form: FormId) -> Task<Message> {
        let run = match form {
            FormId::Predictor => self.predictor.progress.run(),
            FormId::Comparator => self.comparator.progress.run(),
        };

        Task::perform(sleep(PROGRESS_SETTLE_DELAY), move |_| {
            Message::ProgressSettled(form, run)
        })
    }
}

/// Native picker for a single image file. Dropped and picked files share
/// the validation in `slot::load_image`; the dialog filter is a
/// convenience, not the check.
fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select a dog photo")
        .add_filter("Images", &["jpg", "jpeg", "png", "gif", "bmp", "webp"])
        .pick_file()
}

fn handle_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FilesHovered),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::HoverCleared),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application("PawMatch", PawMatch::update, PawMatch::view)
        .subscription(PawMatch::subscription)
        .theme(PawMatch::theme)
        .centered()
        .run_with(PawMatch::new)
}
