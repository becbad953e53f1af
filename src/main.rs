//! Forecast - current weather for a city, in the terminal

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use forecast::action::Action;
use forecast::api::{self, DEFAULT_BASE_URL, WeatherClient};
use forecast::components::{Component, WeatherApp, WeatherAppProps};
use forecast::effect::Effect;
use forecast::logging;
use forecast::reducer::reducer;
use forecast::state::AppState;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Current weather for a city
#[derive(Parser, Debug)]
#[command(name = "forecast")]
#[command(about = "Look up the current weather for a city")]
struct Args {
    /// Base URL of the weather backend (serves GET /weather/{city})
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Prefill the city input and fetch on startup
    #[arg(long, short)]
    city: Option<String>,

    /// Diagnostic log file (defaults to forecast.log in the temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ForecastComponentId {
    Main,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ForecastContext {
    Main,
}

impl EventRoutingState<ForecastComponentId, ForecastContext> for AppState {
    fn focused(&self) -> Option<ForecastComponentId> {
        Some(ForecastComponentId::Main)
    }

    fn modal(&self) -> Option<ForecastComponentId> {
        None
    }

    fn binding_context(&self, _id: ForecastComponentId) -> ForecastContext {
        ForecastContext::Main
    }

    fn default_context(&self) -> ForecastContext {
        ForecastContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_url,
        city,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let log_path = log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;
    tracing::info!(%api_url, "starting forecast");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let fetch_on_start = city.is_some();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(city.unwrap_or_default()))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);
    let client = WeatherClient::new(api_url);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let initial_action = fetch_on_start.then_some(Action::WeatherFetch);
    let result = run_app(
        &mut terminal,
        &debug,
        store,
        client,
        initial_action,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("forecast exited");
    Ok(())
}

struct ForecastUi {
    app: WeatherApp,
}

impl ForecastUi {
    fn new() -> Self {
        Self {
            app: WeatherApp::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<ForecastComponentId>,
    ) {
        event_ctx.set_component_area(ForecastComponentId::Main, area);

        let props = WeatherAppProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.app.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherAppProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.app.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: WeatherClient,
    initial_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(ForecastUi::new()));
    let mut bus: EventBus<AppState, Action, ForecastComponentId, ForecastContext> =
        EventBus::new();
    let keybindings: Keybindings<ForecastContext> = Keybindings::new();

    let ui_main = Rc::clone(&ui);
    bus.register(ForecastComponentId::Main, move |event, state| {
        ui_main.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&client, effect, ctx),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(client: &WeatherClient, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchWeather { city } => {
            let client = client.clone();
            ctx.tasks().spawn("weather", async move {
                api::fetch_action(&client, city).await
            });
        }
    }
}
