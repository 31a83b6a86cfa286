//!
//! # Quadratic curve demo
//!
//! Shows a quadratic bezier curve being dragged around by its three defining points. The
//! demo has no real pointer attached, so it replays a scripted pointer session against the
//! interaction controller and prints the resulting drawing instructions as JSON.
//!
//! Pass the path of a JSON configuration file as the first argument to change the styles or
//! the rendering options.
//!

#[macro_use]
extern crate log;

use quad_curve_demo::*;

use futures::prelude::*;
use futures::stream;
use futures::executor;

use std::env;
use std::process;

fn main() {
    pretty_env_logger::init();

    // An alternative style and set of options can be supplied as a JSON file on the command line
    let config = match env::args().nth(1) {
        Some(path) => {
            match load_config(&path) {
                Ok(config)  => config,
                Err(err)    => {
                    error!("Could not read the configuration from {}: {:?}", path, err);
                    process::exit(1);
                }
            }
        },

        None => DemoConfig::default()
    };

    let mut controller = DemoController::new(config.style, config.options, (0.0, 0.0));

    // Pull cp1 up and to the right, then drag p2 outwards until the pointer leaves the window
    let session = vec![
        PointerEvent { action: PointerAction::ButtonDown,   location_in_window: (500.0, 200.0) },
        PointerEvent { action: PointerAction::Move,         location_in_window: (525.0, 190.0) },
        PointerEvent { action: PointerAction::Move,         location_in_window: (550.0, 180.0) },
        PointerEvent { action: PointerAction::ButtonUp,     location_in_window: (550.0, 180.0) },

        PointerEvent { action: PointerAction::ButtonDown,   location_in_window: (600.0, 350.0) },
        PointerEvent { action: PointerAction::Move,         location_in_window: (630.0, 360.0) },
        PointerEvent { action: PointerAction::Move,         location_in_window: (660.0, 370.0) },
        PointerEvent { action: PointerAction::Leave,        location_in_window: (660.0, 370.0) }
    ];

    executor::block_on(async {
        let mut events = stream::iter(session);

        while let Some(event) = events.next().await {
            controller.handle_event(event);
        }
    });

    info!("Final points: {:?}", controller.points());

    // Print the drawing so that a renderer can replay it
    let drawing = controller.drawing();

    println!("{}", serde_json::to_string_pretty(&drawing).unwrap());
}
