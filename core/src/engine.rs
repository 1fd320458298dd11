use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

#[derive(Clone, Debug, PartialEq)]
struct Round {
    id: RoundId,
    count: TileCount,
    tiles: Vec<Tile>,
    expected_index: TileIndex,
    scramble_pass: u8,
    phase: Phase,
}

/// Drives one memory round after another: creation, countdown, scrambles and click checking.
///
/// Rendering, timers and text are injected, so the whole sequence can run against fakes and a
/// [`VirtualScheduler`].
#[derive(Debug)]
pub struct MemoryGame<S, T, C = English> {
    config: GameConfig,
    catalog: C,
    surface: S,
    scheduler: T,
    rng: SmallRng,
    placer: RandomPlacer,
    round: Option<Round>,
    last_round_id: RoundId,
}

impl<S: Surface, T: Scheduler, C: MessageCatalog> MemoryGame<S, T, C> {
    pub fn new(config: GameConfig, catalog: C, surface: S, scheduler: T, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let placer = RandomPlacer::new(rng.random());
        Self {
            config,
            catalog,
            surface,
            scheduler,
            rng,
            placer,
            round: None,
            last_round_id: 0,
        }
    }

    /// Shows the idle prompt and allows submissions.
    pub fn prime(&mut self) {
        let (min, max) = (self.config.min_count, self.config.max_count);
        self.report(MessageId::Ready { min, max }, Severity::Info);
        self.surface.set_submit_enabled(true);
    }

    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::Idle, |round| round.phase)
    }

    pub fn tiles(&self) -> &[Tile] {
        match &self.round {
            Some(round) => &round.tiles,
            None => &[],
        }
    }

    pub fn expected_index(&self) -> TileIndex {
        self.round.as_ref().map_or(0, |round| round.expected_index)
    }

    pub fn scramble_pass(&self) -> u8 {
        self.round.as_ref().map_or(0, |round| round.scramble_pass)
    }

    pub fn round_id(&self) -> Option<RoundId> {
        self.round.as_ref().map(|round| round.id)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// Starts a new round from the raw input, abandoning any round in progress.
    ///
    /// Invalid input is reported on the status line and changes nothing else.
    pub fn submit(&mut self, raw: &str) -> Result<TileCount> {
        let count = match self.config.validate_count(raw) {
            Ok(count) => count,
            Err(err) => {
                log::debug!("rejected count {:?}: {}", raw, err);
                self.report(err.message_id(), Severity::Warn);
                return Err(err);
            }
        };

        self.surface.set_submit_enabled(false);
        self.report(MessageId::Creating, Severity::Info);
        self.scheduler.cancel_all();
        self.clear_board();
        self.create_tiles(count);
        self.enter_waiting();

        Ok(count)
    }

    /// Handles a fired timer. Events left over from an earlier round do nothing.
    pub fn on_timer(&mut self, event: TimerEvent) {
        if self.round_id() != Some(event.round()) {
            log::warn!("ignoring stale timer {:?}", event);
            return;
        }

        match (event, self.phase()) {
            (TimerEvent::BeginScramble { .. }, Phase::Waiting) => self.begin_scrambling(),
            (TimerEvent::ScrambleTick { .. }, Phase::Scrambling) => self.scramble_pass_now(),
            (event, phase) => log::debug!("timer {:?} has nothing to do in {:?}", event, phase),
        }
    }

    /// Checks a click on the tile with original index `index` against the expected order.
    pub fn click(&mut self, index: TileIndex) -> ClickOutcome {
        let Some(round) = self.round.as_mut() else {
            return ClickOutcome::Ignored;
        };

        if !round.phase.accepts_clicks() {
            return ClickOutcome::Ignored;
        }

        let Some(tile) = round.tiles.get_mut(usize::from(index)) else {
            log::warn!("click on unknown tile {}", index);
            return ClickOutcome::Ignored;
        };

        if !tile.click_enabled() {
            return ClickOutcome::Ignored;
        }

        log::trace!("clicked {} expecting {}", index, round.expected_index);

        if tile.index() == round.expected_index {
            tile.lock_revealed();
            self.surface.update_tile(tile);
            round.expected_index += 1;

            if round.expected_index == round.count {
                round.phase = Phase::Won;
                log::debug!("round {} won", round.id);
                self.report(MessageId::Won, Severity::Ok);
                ClickOutcome::Won
            } else {
                ClickOutcome::Advanced
            }
        } else {
            for tile in &mut round.tiles {
                tile.lock_revealed();
                self.surface.update_tile(tile);
            }
            round.phase = Phase::Failed;
            log::debug!(
                "round {} failed: clicked {} expecting {}",
                round.id,
                index,
                round.expected_index
            );
            self.report(MessageId::WrongOrder, Severity::Warn);
            ClickOutcome::Failed
        }
    }

    fn report(&mut self, id: MessageId, severity: Severity) {
        let status = Status::new(self.catalog.text(id), severity);
        self.surface.set_status(&status);
    }

    fn clear_board(&mut self) {
        self.surface.clear_tiles();
        self.round = None;
    }

    fn create_tiles(&mut self, count: TileCount) {
        self.last_round_id = self.last_round_id.wrapping_add(1);
        self.surface.set_layout(LayoutMode::Flow);

        let tiles: Vec<Tile> = (0..count)
            .map(|index| Tile::new(index, Hsl::random(&mut self.rng)))
            .collect();
        for tile in &tiles {
            self.surface.create_tile(tile);
        }

        log::debug!("round {} created with {} tiles", self.last_round_id, count);
        self.round = Some(Round {
            id: self.last_round_id,
            count,
            tiles,
            expected_index: 0,
            scramble_pass: 0,
            phase: Phase::Created,
        });
    }

    fn enter_waiting(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.phase = Phase::Waiting;
        let (id, count) = (round.id, round.count);

        self.report(
            MessageId::Waiting {
                seconds: count.into(),
            },
            Severity::Info,
        );
        self.scheduler.schedule_once(
            self.config.wait_ms(count),
            TimerEvent::BeginScramble { round: id },
        );
    }

    fn begin_scrambling(&mut self) {
        self.surface.set_layout(LayoutMode::Free);
        self.pin_tiles();

        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.phase = Phase::Scrambling;
        let id = round.id;
        log::debug!("round {} scrambling", id);

        // first pass right away, the rest on the interval
        self.scramble_pass_now();
        if self.phase() == Phase::Scrambling {
            self.scheduler.schedule_repeating(
                self.config.scramble_interval_ms,
                TimerEvent::ScrambleTick { round: id },
            );
        }
    }

    /// Fixes every tile at its current flow offset so switching to free layout does not move it.
    fn pin_tiles(&mut self) {
        let container = self.surface.measure_container();
        let Some(round) = self.round.as_mut() else {
            return;
        };
        for tile in &mut round.tiles {
            let rect = self.surface.measure_tile(tile.index());
            tile.set_position(rect.offset_from(&container));
            self.surface.update_tile(tile);
        }
    }

    fn scramble_pass_now(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.scramble_pass += 1;
        let (pass, total) = (round.scramble_pass, round.count);

        for tile in &mut round.tiles {
            // sizes are re-read every time, the page may have reflowed since the last pass
            let size = self.surface.measure_tile(tile.index()).size();
            let container = self.surface.measure_container().size();
            tile.set_position(self.placer.place(size, container));
            self.surface.update_tile(tile);
        }

        self.report(MessageId::Scrambling { pass, total }, Severity::Info);

        if pass >= total {
            self.scheduler.cancel_all();
            self.prepare_for_clicks();
        }
    }

    fn prepare_for_clicks(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        for tile in &mut round.tiles {
            tile.set_label_visible(false);
            tile.set_click_enabled(false);
            tile.set_click_enabled(true);
            self.surface.update_tile(tile);
        }
        round.expected_index = 0;
        round.phase = Phase::AwaitingClicks;
        log::debug!("round {} awaiting clicks", round.id);

        self.report(MessageId::ClickToPlay, Severity::Ok);
        // a new round may be started while this one is still being played
        self.surface.set_submit_enabled(true);
    }
}

impl<S: Surface, C: MessageCatalog> MemoryGame<S, VirtualScheduler, C> {
    /// Moves simulated time forward, delivering every timer that falls due on the way.
    pub fn advance(&mut self, ms: u64) {
        let until_ms = self.scheduler.now_ms().saturating_add(ms);
        while let Some(event) = self.scheduler.next_due(until_ms) {
            self.on_timer(event);
        }
        self.scheduler.set_now(until_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use alloc::vec;

    fn game() -> MemoryGame<RecordingSurface, VirtualScheduler> {
        let mut game = MemoryGame::new(
            GameConfig::default(),
            English,
            RecordingSurface::new(Rect::new(10.0, 20.0, 600.0, 400.0), Size::new(80.0, 40.0)),
            VirtualScheduler::new(),
            42,
        );
        game.prime();
        game
    }

    /// Runs the countdown and every scramble pass for a fresh round of `count` tiles.
    fn ready_to_click(count: TileCount) -> MemoryGame<RecordingSurface, VirtualScheduler> {
        let mut game = game();
        let raw = alloc::format!("{}", count);
        game.submit(&raw).unwrap();
        game.advance(u64::from(count) * 1000 + u64::from(count - 1) * 2000);
        assert_eq!(game.phase(), Phase::AwaitingClicks);
        game
    }

    #[test]
    fn prime_shows_ready_prompt() {
        let game = game();
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(
            game.surface().status(),
            Some(&Status::new("Enter a number (3–7) and press Go.", Severity::Info))
        );
        assert!(game.surface().submit_enabled());
    }

    #[test]
    fn rejected_input_leaves_game_idle() {
        let mut game = game();

        assert_eq!(game.submit("abc"), Err(GameError::NotAnInteger));
        assert_eq!(
            game.surface().status(),
            Some(&Status::new("Please enter a whole number.", Severity::Warn))
        );

        assert!(matches!(
            game.submit("8"),
            Err(GameError::OutOfRange { value: 8, .. })
        ));
        assert_eq!(
            game.surface().status(),
            Some(&Status::new(
                "Please enter a number between 3 and 7.",
                Severity::Warn
            ))
        );

        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.tiles().is_empty());
        assert_eq!(game.surface().created(), 0);
        assert_eq!(game.scheduler().pending_count(), 0);
        assert!(game.surface().submit_enabled());
    }

    #[test]
    fn rejected_input_does_not_disturb_a_running_round() {
        let mut game = ready_to_click(3);
        assert_eq!(game.click(0), ClickOutcome::Advanced);

        assert!(game.submit("2").is_err());

        assert_eq!(game.phase(), Phase::AwaitingClicks);
        assert_eq!(game.expected_index(), 1);
        assert_eq!(game.click(1), ClickOutcome::Advanced);
    }

    #[test]
    fn submit_creates_unique_indices_and_waits() {
        let mut game = game();
        assert_eq!(game.submit("5"), Ok(5));

        let indices: Vec<_> = game.tiles().iter().map(Tile::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert!(game.tiles().iter().all(|tile| tile.label_visible()));
        assert!(game.tiles().iter().all(|tile| !tile.click_enabled()));

        assert_eq!(game.phase(), Phase::Waiting);
        assert_eq!(game.surface().layout(), LayoutMode::Flow);
        assert!(!game.surface().submit_enabled());
        assert_eq!(
            game.surface().status().map(|s| s.text.as_str()),
            Some("Memorize the order… starting in 5 seconds…")
        );
        assert_eq!(game.scheduler().pending_count(), 1);
    }

    #[test]
    fn colors_are_rerolled_each_round() {
        let mut game = game();
        game.submit("7").unwrap();
        let first: Vec<_> = game.tiles().iter().map(Tile::color).collect();
        game.submit("7").unwrap();
        let second: Vec<_> = game.tiles().iter().map(Tile::color).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn scrambles_start_after_count_seconds() {
        let mut game = game();
        game.submit("4").unwrap();

        game.advance(3999);
        assert_eq!(game.phase(), Phase::Waiting);
        assert_eq!(game.scramble_pass(), 0);

        game.advance(1);
        assert_eq!(game.phase(), Phase::Scrambling);
        assert_eq!(game.scramble_pass(), 1);
        assert_eq!(game.surface().layout(), LayoutMode::Free);
        assert_eq!(
            game.surface().status().map(|s| s.text.as_str()),
            Some("Scrambling 1/4…")
        );

        game.advance(2000);
        assert_eq!(game.scramble_pass(), 2);
        game.advance(1999);
        assert_eq!(game.scramble_pass(), 2);
        game.advance(1);
        assert_eq!(game.scramble_pass(), 3);
    }

    #[test]
    fn tiles_are_pinned_at_flow_offsets_before_scrambling() {
        let mut game = game();
        game.submit("3").unwrap();
        game.advance(3000);

        let pins = game.surface().first_positions();
        assert_eq!(pins.len(), 3);
        for (index, pin) in pins.iter().enumerate() {
            let flow = game.surface().flow_rect(index as TileIndex);
            assert_eq!(*pin, flow.offset_from(&game.surface().measure_container()));
        }
    }

    #[test]
    fn final_scramble_keeps_tiles_inside_and_hides_labels() {
        let mut game = ready_to_click(6);
        let container = game.surface().measure_container();

        assert_eq!(game.scramble_pass(), 6);
        for tile in game.tiles() {
            let size = game.surface().measure_tile(tile.index()).size();
            let pos = tile.position().unwrap();
            assert!(container.contains_box(pos, size), "{:?} escapes", pos);
            assert_eq!(tile.label(), None);
            assert!(tile.click_enabled());
        }

        assert_eq!(game.expected_index(), 0);
        assert_eq!(game.surface().clickable_count(), 6);
        assert!(game.surface().submit_enabled());
        assert_eq!(
            game.surface().status(),
            Some(&Status::new(
                "Now click buttons in the original order.",
                Severity::Ok
            ))
        );
        assert_eq!(game.scheduler().pending_count(), 0);

        game.advance(60_000);
        assert_eq!(game.scramble_pass(), 6);
        assert_eq!(game.phase(), Phase::AwaitingClicks);
    }

    #[test]
    fn placement_follows_reflowed_container() {
        let mut game = game();
        game.submit("3").unwrap();
        game.advance(3000);

        game.surface_mut()
            .resize_container(Size::new(120.0, 60.0));
        game.advance(4000);

        let container = game.surface().measure_container();
        for tile in game.tiles() {
            let pos = tile.position().unwrap();
            assert!(container.contains_box(pos, Size::new(80.0, 40.0)));
        }
    }

    #[test]
    fn clicks_during_scrambling_are_ignored() {
        let mut game = game();
        game.submit("3").unwrap();
        assert_eq!(game.click(0), ClickOutcome::Ignored);
        game.advance(3000);
        assert_eq!(game.click(0), ClickOutcome::Ignored);
        assert_eq!(game.expected_index(), 0);
    }

    #[test]
    fn clicking_in_order_wins() {
        let mut game = ready_to_click(4);

        for index in 0..3 {
            assert_eq!(game.click(index), ClickOutcome::Advanced);
            let tile = &game.tiles()[usize::from(index)];
            assert_eq!(tile.label(), Some(index + 1));
            assert!(!tile.click_enabled());
            assert_eq!(game.expected_index(), index + 1);
        }
        assert_eq!(game.click(3), ClickOutcome::Won);

        assert_eq!(game.phase(), Phase::Won);
        assert!(game.tiles().iter().all(|tile| tile.label_visible()));
        assert!(game.tiles().iter().all(|tile| !tile.click_enabled()));
        assert_eq!(
            game.surface().status(),
            Some(&Status::new("Excellent memory!", Severity::Ok))
        );
        assert_eq!(game.click(0), ClickOutcome::Ignored);
    }

    #[test]
    fn revealed_tile_cannot_be_clicked_again() {
        let mut game = ready_to_click(3);
        assert_eq!(game.click(0), ClickOutcome::Advanced);
        assert_eq!(game.click(0), ClickOutcome::Ignored);
        assert_eq!(game.phase(), Phase::AwaitingClicks);
        assert_eq!(game.expected_index(), 1);
    }

    #[test]
    fn wrong_click_reveals_everything_and_fails() {
        let mut game = ready_to_click(5);

        assert_eq!(game.click(0), ClickOutcome::Advanced);
        assert_eq!(game.click(1), ClickOutcome::Advanced);
        assert_eq!(game.click(3), ClickOutcome::Failed);

        assert_eq!(game.phase(), Phase::Failed);
        assert_eq!(game.tiles().len(), 5);
        assert!(game.tiles().iter().all(|tile| tile.label_visible()));
        assert!(game.tiles().iter().all(|tile| !tile.click_enabled()));
        assert_eq!(
            game.surface().status(),
            Some(&Status::new("Wrong order!", Severity::Warn))
        );
        for index in 0..5 {
            assert_eq!(game.click(index), ClickOutcome::Ignored);
        }
        assert_eq!(game.phase(), Phase::Failed);
        assert_eq!(game.surface().clickable_count(), 0);
        assert_eq!(
            game.surface().rendered_labels(),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn oversized_tiles_fail_then_restart_and_win() {
        let mut game = MemoryGame::new(
            GameConfig::default(),
            English,
            RecordingSurface::new(Rect::new(0.0, 0.0, 50.0, 30.0), Size::new(80.0, 40.0)),
            VirtualScheduler::new(),
            7,
        );
        game.prime();
        game.submit("7").unwrap();
        game.advance(7000 + 6 * 2000);
        assert_eq!(game.phase(), Phase::AwaitingClicks);
        assert!(
            game.tiles()
                .iter()
                .all(|tile| tile.position() == Some(Position::new(0.0, 0.0)))
        );

        assert_eq!(game.click(6), ClickOutcome::Failed);
        assert_eq!(game.click(0), ClickOutcome::Ignored);

        game.submit("3").unwrap();
        game.advance(3000 + 2 * 2000);
        for index in 0..2 {
            assert_eq!(game.click(index), ClickOutcome::Advanced);
        }
        assert_eq!(game.click(2), ClickOutcome::Won);

        assert_eq!(game.submit(""), Err(GameError::NotAnInteger));
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn unknown_tile_is_ignored() {
        let mut game = ready_to_click(3);
        assert_eq!(game.click(9), ClickOutcome::Ignored);
        assert_eq!(game.phase(), Phase::AwaitingClicks);
    }

    #[test]
    fn new_round_cancels_pending_timers_of_the_old_one() {
        let mut game = game();
        game.submit("7").unwrap();
        game.advance(7000);
        assert_eq!(game.scramble_pass(), 1);
        let old_round = game.round_id().unwrap();

        game.submit("3").unwrap();
        assert_eq!(game.scramble_pass(), 0);
        assert_eq!(game.surface().created(), 3);

        // the old interval would have ticked here
        game.advance(2000);
        assert_eq!(game.phase(), Phase::Waiting);
        assert_eq!(game.scramble_pass(), 0);

        game.on_timer(TimerEvent::ScrambleTick { round: old_round });
        game.on_timer(TimerEvent::BeginScramble { round: old_round });
        assert_eq!(game.phase(), Phase::Waiting);

        game.advance(1000);
        assert_eq!(game.scramble_pass(), 1);
        game.advance(4000);
        assert_eq!(game.phase(), Phase::AwaitingClicks);
        assert_eq!(game.scramble_pass(), 3);
        assert_eq!(game.tiles().len(), 3);
    }

    #[test]
    fn new_round_can_start_while_clicking() {
        let mut game = ready_to_click(3);
        assert_eq!(game.click(0), ClickOutcome::Advanced);

        assert_eq!(game.submit("4"), Ok(4));
        assert_eq!(game.phase(), Phase::Waiting);
        assert_eq!(game.expected_index(), 0);
        assert_eq!(game.surface().created(), 4);
        assert!(game.tiles().iter().all(|tile| tile.label_visible()));
    }
}
