//! Game module - the frame loop that ties input, shooting, physics, and scoring together
//!
//! [`Game`] is plain data plus methods so the same code runs inside Bevy,
//! in the headless scenario runner, and in the batch simulator.

mod trail;

pub use trail::{TrailHistory, TrailParticle};

use bevy::prelude::*;

use crate::constants::*;
use crate::events::{EventBus, GameConfig, GameEvent, session_start_event};
use crate::input::{DragSummary, PointerTracker};
use crate::physics::{FlightSimulator, Pose};
use crate::scoring::ScoringMonitor;
use crate::session::{PlayBounds, ResetReason, SessionState};
use crate::settings::InitSettings;
use crate::shooting::{ShotPlan, ShotPlanner};
use crate::tuning::ShotTweaks;
use crate::world::build_flight_simulator;

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub steps: u32,
    pub scored: bool,
    pub reset: Option<ResetReason>,
}

/// Arrow drawn from the ball toward the aim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimIndicator {
    pub origin: Vec3,
    pub direction: Vec3,
    pub length: f32,
    /// Degrees: green at zero charge, red at full
    pub hue: f32,
}

/// The whole single-player session
#[derive(Resource)]
pub struct Game {
    pub session: SessionState,
    pub tracker: PointerTracker,
    pub trail: TrailHistory,
    pub events: EventBus,
    planner: ShotPlanner,
    flight: FlightSimulator,
    scoring: ScoringMonitor,
    bounds: PlayBounds,
    settle_timeout: f32,
    /// Plan currently shown (idle, live while charging, final while in flight)
    plan: ShotPlan,
    /// Final plan of the most recent shot
    last_shot: Option<ShotPlan>,
    preview: Vec<Vec3>,
    show_preview: bool,
    ball_pose: Pose,
    /// Latest game-clock time seen (seconds)
    clock: f64,
}

impl Game {
    pub fn new(settings: &InitSettings, tweaks: &ShotTweaks) -> Self {
        let layout = tweaks.court_layout();
        let flight = build_flight_simulator(&layout);
        let scoring = ScoringMonitor::new(flight.score_trigger(), flight.ball());
        let planner = ShotPlanner::from_config(settings.aim_scheme, settings.power_preset)
            .with_origin(layout.ball_start)
            .with_gravity(layout.gravity_vector());
        let plan = planner.idle_plan();
        let preview = planner.preview(&plan);
        let ball_pose = flight.current_pose();

        let mut events = EventBus::new();
        events.emit(session_start_event());
        let curve = planner.curve();
        events.emit(GameEvent::Config(GameConfig {
            aim_scheme: settings.aim_scheme.name().to_string(),
            power_preset: settings.power_preset.name().to_string(),
            gravity: layout.gravity,
            base_power: curve.base_power,
            charge_gain: curve.charge_gain,
            max_charge: curve.max_charge,
            settle_timeout: tweaks.settle_timeout,
        }));

        Self {
            session: SessionState::default(),
            tracker: PointerTracker::default(),
            trail: TrailHistory::default(),
            events,
            planner,
            flight,
            scoring,
            bounds: PlayBounds::default(),
            settle_timeout: tweaks.settle_timeout,
            plan,
            last_shot: None,
            preview,
            show_preview: settings.show_preview,
            ball_pose,
            clock: 0.0,
        }
    }

    /// Default tuning with the given settings (scenario runner, batch simulation)
    pub fn headless(settings: &InitSettings) -> Self {
        Self::new(settings, &ShotTweaks::default())
    }

    // ========================================================================
    // Pointer operations
    // ========================================================================

    /// Pointer pressed: start charging unless a ball is in play
    pub fn on_press_start(&mut self, pos: Vec2, now: f64) -> bool {
        self.set_clock(now);
        if !self
            .tracker
            .press_start(pos, now, self.session.is_ball_in_play())
        {
            return false;
        }
        if !self.session.begin_charge(now) {
            self.tracker.cancel();
            return false;
        }
        self.replan(Vec2::ZERO, 0.0);
        self.events.emit(GameEvent::ChargeStart { pos: (pos.x, pos.y) });
        true
    }

    /// Pointer moved: update the aim while dragging
    pub fn on_press_move(&mut self, pos: Vec2) -> bool {
        let Some(delta) = self
            .tracker
            .press_move(pos, self.session.is_ball_in_play())
        else {
            return false;
        };
        if let Some(started_at) = self.session.charge_started_at() {
            self.replan(delta, (self.clock - started_at) as f32);
        }
        true
    }

    /// Pointer released: launch
    pub fn on_press_end(&mut self, now: f64) -> bool {
        self.set_clock(now);
        match self.tracker.press_end() {
            Some(summary) => self.release(summary, now),
            None => false,
        }
    }

    /// Pointer left the surface mid-drag: launch, same as a release
    pub fn on_press_leave(&mut self, now: f64) -> bool {
        self.set_clock(now);
        match self.tracker.press_leave() {
            Some(summary) => self.release(summary, now),
            None => false,
        }
    }

    /// Debug shot: drop the ball straight through the rim. Idle only.
    pub fn test_shot(&mut self) -> bool {
        if !self.session.commit_test_shot() {
            return false;
        }
        self.tracker.cancel();
        self.flight.launch(TEST_SHOT_ORIGIN, TEST_SHOT_IMPULSE);
        self.ball_pose = self.flight.current_pose();
        self.preview.clear();
        self.trail.clear();
        self.events.emit(GameEvent::TestShot {
            shot: self.session.shots_taken,
        });
        true
    }

    fn release(&mut self, summary: DragSummary, now: f64) -> bool {
        let held = (now - summary.started_at).max(0.0) as f32;
        let plan = self.planner.plan(summary.delta, held);
        if !self.session.commit_shot(plan.charge) {
            return false;
        }

        self.flight.launch(self.planner.origin(), plan.launch);
        self.ball_pose = self.flight.current_pose();
        self.plan = plan;
        self.last_shot = Some(plan);
        self.preview.clear();
        self.trail.clear();

        self.events.emit(GameEvent::ShotRelease {
            shot: self.session.shots_taken,
            charge: plan.charge,
            power: plan.power,
            yaw: plan.aim.yaw().to_degrees(),
            elevation: plan.aim.elevation().to_degrees(),
        });
        true
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    /// Advance one rendered frame
    pub fn tick(&mut self, frame_dt: f32, now: f64) -> FrameReport {
        self.set_clock(now);
        let mut report = FrameReport::default();

        // 1. Physics, then scoring on whatever the trigger saw
        report.steps = self.flight.step(frame_dt);
        for contact in self.flight.drain_trigger_contacts() {
            if self.scoring.on_collide(&contact, &mut self.session) {
                report.scored = true;
                self.events.emit(GameEvent::Scored {
                    score: self.session.score,
                    shots: self.session.shots_taken,
                });
            }
        }

        // 2. Pose read-back
        self.ball_pose = self.flight.current_pose();

        // 3. Live charge and preview
        if let Some(started_at) = self.session.charge_started_at() {
            let held = (now - started_at).max(0.0) as f32;
            self.replan(self.tracker.delta(), held);
        }

        // 4. Trail
        if self.session.is_ball_in_play() {
            self.trail.record(self.ball_pose.position);
        }
        self.trail.age();

        // 5. End of attempt
        if self.session.is_ball_in_play() {
            if self.bounds.is_out(self.ball_pose.position) {
                report.reset = Some(ResetReason::OutOfBounds);
            } else if self.session.observe_rest(
                self.flight.velocity().length(),
                frame_dt,
                self.settle_timeout,
            ) {
                report.reset = Some(ResetReason::Settled);
            }
        }
        if let Some(reason) = report.reset {
            self.reset_attempt(reason);
        }

        report
    }

    fn replan(&mut self, drag: Vec2, held: f32) {
        let plan = self.planner.plan(drag, held);
        self.session.set_charge(plan.charge);
        self.preview = self.planner.preview(&plan);
        self.plan = plan;
    }

    fn reset_attempt(&mut self, reason: ResetReason) {
        let scored = self.session.scored_this_attempt();
        self.flight.reset_to_start();
        self.session.reset_attempt();
        self.tracker.cancel();
        self.ball_pose = self.flight.current_pose();
        self.plan = self.planner.idle_plan();
        self.preview = self.planner.preview(&self.plan);
        self.events.emit(GameEvent::AttemptReset { reason, scored });
    }

    fn set_clock(&mut self, now: f64) {
        self.clock = now;
        self.events.update_time(now);
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn ball_pose(&self) -> Pose {
        self.ball_pose
    }

    pub fn ball_velocity(&self) -> Vec3 {
        self.flight.velocity()
    }

    pub fn plan(&self) -> &ShotPlan {
        &self.plan
    }

    pub fn last_shot(&self) -> Option<&ShotPlan> {
        self.last_shot.as_ref()
    }

    pub fn planner(&self) -> &ShotPlanner {
        &self.planner
    }

    /// Predicted arc (empty while the ball is in play)
    pub fn preview(&self) -> &[Vec3] {
        &self.preview
    }

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    /// Charge as shown in the HUD (0-100)
    pub fn power_percent(&self) -> u32 {
        self.planner.curve().percent(self.session.charge_power())
    }

    /// Arrow state, hidden while the ball is in play
    pub fn aim_indicator(&self) -> Option<AimIndicator> {
        if self.session.is_ball_in_play() {
            return None;
        }
        let charge = self.session.charge_power();
        let ratio = self.planner.curve().ratio(charge);
        Some(AimIndicator {
            origin: self.planner.origin(),
            direction: self.plan.aim.direction(),
            length: AIM_INDICATOR_BASE_LENGTH + charge * AIM_INDICATOR_CHARGE_LENGTH,
            hue: (1.0 - ratio) * AIM_INDICATOR_MAX_HUE,
        })
    }

    /// Move the ball without changing its velocity (debugging and scenarios)
    pub fn teleport_ball(&mut self, position: Vec3) {
        self.flight.teleport(position);
        self.ball_pose = self.flight.current_pose();
    }
}

// ============================================================================
// Bevy systems
// ============================================================================

/// Runs in Update after capture_pointer: advance the game one frame
pub fn tick_game(time: Res<Time>, mut game: ResMut<Game>) {
    let report = game.tick(time.delta_secs(), time.elapsed_secs_f64());
    if let Some(reason) = report.reset {
        debug!("Attempt ended: {}", reason);
    }
}

/// Mirror the physics pose onto the ball mesh
pub fn sync_ball_mesh(game: Res<Game>, mut query: Query<&mut Transform, With<crate::world::BallMesh>>) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };
    let pose = game.ball_pose();
    transform.translation = pose.position;
    transform.rotation = pose.rotation;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shooting::{AimScheme, PowerPreset};

    const DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::headless(&InitSettings::default())
    }

    /// Run frames `from..to` at 60 fps
    fn run(game: &mut Game, from: u64, to: u64) -> Vec<FrameReport> {
        (from..to)
            .map(|frame| game.tick(DT, frame as f64 / 60.0))
            .collect()
    }

    fn event_names(game: &mut Game) -> Vec<&'static str> {
        game.events.drain().iter().map(|e| e.event.name()).collect()
    }

    #[test]
    fn test_new_game_logs_session_and_config() {
        let mut game = game();
        assert_eq!(event_names(&mut game), vec!["SessionStart", "Config"]);
        assert!(!game.preview().is_empty());
        assert_eq!(game.ball_pose().position, BALL_START);
    }

    #[test]
    fn test_straight_release_after_half_second() {
        let mut game = game();
        assert!(game.on_press_start(Vec2::new(100.0, 100.0), 0.0));
        run(&mut game, 0, 30);
        assert!(game.session.is_charging());
        assert!(game.on_press_end(0.5));

        let shot = game.last_shot().copied().unwrap();
        assert!(shot.aim.yaw().abs() < 1e-6);
        assert!((shot.power - 25.0).abs() < 1e-4);
        assert_eq!(game.session.shots_taken, 1);
        assert!(game.session.is_ball_in_play());
        assert!(game.preview().is_empty());
        assert_eq!(game.power_percent(), 33);
    }

    #[test]
    fn test_charge_grows_while_held() {
        let mut game = game();
        game.on_press_start(Vec2::ZERO, 0.0);
        let mut last = 0.0;
        for frame in 1..120 {
            game.tick(DT, frame as f64 / 60.0);
            let charge = game.session.charge_power();
            assert!(charge >= last);
            last = charge;
        }
        assert_eq!(last, MAX_CHARGE_SECONDS);
        assert_eq!(game.power_percent(), 100);
    }

    #[test]
    fn test_never_charging_and_in_play() {
        let mut game = game();
        game.on_press_start(Vec2::ZERO, 0.0);
        game.on_press_end(0.2);
        // Presses during flight are ignored
        assert!(!game.on_press_start(Vec2::ZERO, 0.3));
        for frame in 12..400 {
            game.tick(DT, frame as f64 / 60.0);
            assert!(!(game.session.is_charging() && game.session.is_ball_in_play()));
        }
    }

    #[test]
    fn test_out_of_bounds_resets() {
        let mut game = game();
        game.on_press_start(Vec2::ZERO, 0.0);
        game.on_press_end(0.1);
        game.teleport_ball(Vec3::new(0.0, -3.0, 0.0));
        let report = game.tick(DT, 0.2);
        assert_eq!(report.reset, Some(ResetReason::OutOfBounds));

        assert!(!game.session.is_ball_in_play());
        assert!(!game.session.scored_this_attempt());
        assert_eq!(game.session.charge_power(), 0.0);
        assert_eq!(game.ball_pose().position, BALL_START);
        assert_eq!(game.ball_velocity(), Vec3::ZERO);
        assert!(!game.preview().is_empty());
        assert!(game.aim_indicator().is_some());
    }

    #[test]
    fn test_test_shot_scores_exactly_once() {
        let mut game = game();
        assert!(game.test_shot());
        let reports = run(&mut game, 0, 600);
        let scores = reports.iter().filter(|r| r.scored).count();
        assert_eq!(scores, 1);
        assert_eq!(game.session.score, 1);
        assert_eq!(game.session.shots_taken, 1);
        // Ball eventually came back
        assert!(!game.session.is_ball_in_play());
        assert!(reports.iter().any(|r| r.reset.is_some()));
    }

    #[test]
    fn test_test_shot_only_from_idle() {
        let mut game = game();
        game.on_press_start(Vec2::ZERO, 0.0);
        assert!(!game.test_shot());
        assert_eq!(game.session.shots_taken, 0);
    }

    #[test]
    fn test_leave_commits_shot() {
        let mut game = game();
        game.on_press_start(Vec2::new(200.0, 200.0), 1.0);
        game.on_press_move(Vec2::new(200.0, 150.0));
        assert!(game.on_press_leave(1.4));
        assert!(game.session.is_ball_in_play());
        let shot = game.last_shot().copied().unwrap();
        assert!(shot.aim.elevation() > 0.0);
        assert!(!game.on_press_leave(1.5));
        assert_eq!(game.session.shots_taken, 1);
    }

    #[test]
    fn test_trail_follows_flight() {
        let mut game = game();
        game.on_press_start(Vec2::ZERO, 0.0);
        game.on_press_move(Vec2::new(0.0, -80.0));
        game.on_press_end(0.3);
        run(&mut game, 18, 80);
        assert!(game.trail.len() <= TRAIL_MAX_LEN);
        assert!(!game.trail.particles().is_empty() || !game.session.is_ball_in_play());
    }

    #[test]
    fn test_aim_indicator_tracks_charge() {
        let mut game = Game::headless(&InitSettings {
            aim_scheme: AimScheme::Angle,
            power_preset: PowerPreset::Soft,
            ..Default::default()
        });
        let idle = game.aim_indicator().unwrap();
        assert!((idle.hue - AIM_INDICATOR_MAX_HUE).abs() < 1e-4);
        assert!((idle.length - 1.0).abs() < 1e-6);

        game.on_press_start(Vec2::ZERO, 0.0);
        game.tick(DT, 1.5);
        let full = game.aim_indicator().unwrap();
        assert!(full.hue.abs() < 1e-4);
        assert!((full.length - 4.0).abs() < 1e-4);

        game.on_press_end(1.5);
        assert!(game.aim_indicator().is_none());
    }

    #[test]
    fn test_event_sequence_for_a_shot() {
        let mut game = game();
        event_names(&mut game);
        game.on_press_start(Vec2::ZERO, 0.0);
        game.on_press_end(0.1);
        game.teleport_ball(Vec3::new(9.0, 1.0, 0.0));
        game.tick(DT, 0.12);
        assert_eq!(
            event_names(&mut game),
            vec!["ChargeStart", "ShotRelease", "AttemptReset"]
        );
    }
}
