//! The event loop. Terminal input and timers arrive on one channel and are
//! handled one at a time on a single task. Frame ticks only run while the
//! scene is animating.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::CardError;
use crate::app::{App, Scheduled, Timer};
use crate::terminal::AppTerminal;
use crate::ui;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Terminal(Event),
    Timer(Timer),
    /// The input reader hit an error and stopped.
    InputClosed,
}

pub async fn run_event_loop(terminal: &mut AppTerminal, app: &mut App) -> Result<(), CardError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    spawn_input_reader(tx.clone());

    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| {
            app.set_viewport(frame.area());
            ui::render(frame, app, now);
        })?;

        // idle cards only redraw when an event arrives
        let animating = app.scene().is_animating(now);
        tokio::select! {
            event = rx.recv() => match event {
                Some(AppEvent::Terminal(event)) => handle_terminal_event(app, event),
                Some(AppEvent::Timer(timer)) => app.handle_timer(timer),
                Some(AppEvent::InputClosed) | None => break,
            },
            _ = frames.tick(), if animating => {}
        }

        for scheduled in app.take_scheduled() {
            schedule(tx.clone(), scheduled);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
        Event::Mouse(mouse) => app.handle_mouse(mouse),
        _ => {}
    }
}

/// Fire-and-forget: once scheduled, a timer always posts its event.
pub fn schedule(tx: mpsc::UnboundedSender<AppEvent>, scheduled: Scheduled) {
    debug!(?scheduled, "timer scheduled");
    tokio::spawn(async move {
        tokio::time::sleep(scheduled.delay).await;
        let _ = tx.send(AppEvent::Timer(scheduled.timer));
    });
}

/// crossterm's reader blocks, so it lives on the blocking pool and stops
/// once the loop drops its receiver.
fn spawn_input_reader(tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if tx.is_closed() {
                break;
            }
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.send(AppEvent::Terminal(event)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(%err, "failed to read terminal event");
                        let _ = tx.send(AppEvent::InputClosed);
                        break;
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    warn!(%err, "failed to poll terminal");
                    let _ = tx.send(AppEvent::InputClosed);
                    break;
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        schedule(
            tx,
            Scheduled {
                delay: Duration::from_millis(1500),
                timer: Timer::AdvanceQuiz { epoch: 3 },
            },
        );

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        match rx.recv().await {
            Some(AppEvent::Timer(Timer::AdvanceQuiz { epoch })) => assert_eq!(epoch, 3),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
