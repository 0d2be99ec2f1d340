use crate::active_restart::{ActiveRestart, ceil_secs};
use crate::recurring_timer::RecurringTimer;
use crate::{
    DelayedTask, RepeatingTimer, RestartHistory, RestartPhase, RestartStatus, RestartTicket,
    SchedulerError, SchedulerMetrics, SchedulerResult, SchedulerSettings, warning_offsets,
};

use rc_core::{
    Broadcaster, HaltAction, RecurringRestart, RestartHistoryEntry, RestartReason, RestartRequest,
    Severity, format_duration, render_template,
};

use std::ops::ControlFlow;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use log::{debug, error, info, warn};
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Owns every restart timeline: the active countdown, recurring daily
/// restarts, the bounded history and the emergency flag.
///
/// All state sits behind one async lock. Broadcasts are sent while it is
/// held so nothing from a cancelled or superseded restart can be delivered
/// after the call that cancelled it returns; `Broadcaster` implementations
/// must therefore not call back into the scheduler.
pub struct RestartScheduler {
    inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
    state: Mutex<SchedulerState>,
    broadcaster: Arc<dyn Broadcaster>,
    halt_action: Arc<dyn HaltAction>,
    metrics: SchedulerMetrics,
}

struct SchedulerState {
    settings: SchedulerSettings,
    phase: RestartPhase,
    active: Option<ActiveRestart>,
    executing: Option<ExecutingRestart>,
    next_generation: u64,
    emergency_active: bool,
    history: RestartHistory,
    total_restarts_managed: u64,
    recurring: Vec<RecurringTimer>,
}

/// A restart past its deadline, waiting out the grace period.
struct ExecutingRestart {
    generation: u64,
    task: Option<DelayedTask>,
}

impl RestartScheduler {
    pub fn new(
        settings: SchedulerSettings,
        broadcaster: Arc<dyn Broadcaster>,
        halt_action: Arc<dyn HaltAction>,
    ) -> Self {
        let history = RestartHistory::new(settings.history_capacity);
        Self {
            inner: Arc::new(SchedulerInner {
                state: Mutex::new(SchedulerState {
                    settings,
                    phase: RestartPhase::Idle,
                    active: None,
                    executing: None,
                    next_generation: 0,
                    emergency_active: false,
                    history,
                    total_restarts_managed: 0,
                    recurring: Vec::new(),
                }),
                broadcaster,
                halt_action,
                metrics: SchedulerMetrics::new(),
            }),
        }
    }

    /// Start a countdown, superseding any non-emergency restart in flight.
    ///
    /// Returns as soon as the timers are armed.
    pub async fn request_restart(&self, request: RestartRequest) -> SchedulerResult<RestartTicket> {
        let detail = format!("Delayed restart after {} seconds", ceil_secs(request.delay));
        self.inner.arm(request, detail, None).await
    }

    /// Cancel the countdown in progress along with recurring occurrences
    /// that have not fired yet. Returns false when there was nothing to
    /// cancel.
    pub async fn cancel_all(&self) -> bool {
        self.inner.cancel_all().await
    }

    /// Arm one daily timer per recurring definition, replacing any armed
    /// before.
    pub async fn initialize(&self) {
        self.inner.initialize().await;
    }

    /// Swap in new settings and re-arm recurring restarts. A countdown in
    /// progress keeps the settings it was armed with.
    pub async fn reload(&self, settings: SchedulerSettings) {
        {
            let mut state = self.inner.state.lock().await;
            state.settings = settings;
        }
        self.inner.initialize().await;
    }

    /// Cancel every timer without executing anything.
    pub async fn shutdown(&self) {
        self.inner.shutdown().await;
    }

    pub async fn is_restart_in_progress(&self) -> bool {
        self.inner.state.lock().await.active.is_some()
    }

    pub async fn remaining_seconds(&self) -> u64 {
        let state = self.inner.state.lock().await;
        state.active.as_ref().map_or(0, |active| active.remaining_secs)
    }

    pub async fn current_reason(&self) -> Option<RestartReason> {
        let state = self.inner.state.lock().await;
        state.active.as_ref().map(|active| active.reason)
    }

    pub async fn current_initiator(&self) -> Option<String> {
        let state = self.inner.state.lock().await;
        state.active.as_ref().map(|active| active.initiator.clone())
    }

    pub async fn is_emergency_active(&self) -> bool {
        self.inner.state.lock().await.emergency_active
    }

    pub async fn history(&self) -> Vec<RestartHistoryEntry> {
        self.inner.state.lock().await.history.snapshot()
    }

    pub async fn total_restarts_managed(&self) -> u64 {
        self.inner.state.lock().await.total_restarts_managed
    }

    pub async fn phase(&self) -> RestartPhase {
        self.inner.state.lock().await.phase
    }

    /// Earliest pending recurring restart in the schedule's timezone.
    pub async fn next_scheduled_restart(&self) -> Option<DateTime<FixedOffset>> {
        let state = self.inner.state.lock().await;
        next_scheduled(&state)
    }

    pub async fn status(&self) -> RestartStatus {
        let state = self.inner.state.lock().await;
        let active = state.active.as_ref();

        RestartStatus {
            phase: state.phase,
            restart_in_progress: active.is_some(),
            remaining_seconds: active.map_or(0, |a| a.remaining_secs),
            total_delay_secs: active.map(|a| a.total_delay_secs),
            requested_at: active.map(|a| a.requested_at),
            reason: active.map(|a| a.reason),
            initiator: active.map(|a| a.initiator.clone()),
            emergency_active: state.emergency_active,
            total_restarts_managed: state.total_restarts_managed,
            next_scheduled_restart: next_scheduled(&state),
            history_len: state.history.len(),
        }
    }
}

impl Clone for RestartScheduler {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SchedulerInner {
    async fn arm(
        self: &Arc<Self>,
        request: RestartRequest,
        detail: String,
        origin: Option<RecurringRestart>,
    ) -> SchedulerResult<RestartTicket> {
        let mut state = self.state.lock().await;
        self.arm_locked(&mut state, request, detail, origin).await
    }

    async fn arm_locked(
        self: &Arc<Self>,
        state: &mut SchedulerState,
        request: RestartRequest,
        detail: String,
        origin: Option<RecurringRestart>,
    ) -> SchedulerResult<RestartTicket> {
        let emergency = request.reason.is_emergency();
        let admitted = admit(state, &request)
            .and_then(|()| deadline_for(Instant::now(), request.delay));
        let deadline = match admitted {
            Ok(deadline) => deadline,
            Err(e) => {
                self.metrics.restart_rejected(request.reason);
                warn!(
                    "Restart request from {} rejected: {}",
                    request.initiator, e
                );
                self.broadcaster
                    .send_to_one(&request.initiator, &e.user_message(), Severity::Warning)
                    .await;
                return Err(e);
            }
        };

        let superseded = state.active.take().map(|mut previous| {
            previous.cancel_timers();
            self.metrics.restart_superseded();
            info!(
                "{} from {} superseded by {} from {}",
                previous.reason, previous.initiator, request.reason, request.initiator
            );
            previous.reason
        });

        state.next_generation += 1;
        let generation = state.next_generation;
        // Rounded up like the countdown so a 500ms restart reads as 1s throughout
        let delay_secs = ceil_secs(request.delay);
        let offsets = warning_offsets(
            delay_secs,
            &state.settings.warning_intervals,
            state.settings.min_warning_delay_secs,
            state.settings.warnings_enabled,
        );

        let weak = Arc::downgrade(self);
        let warnings = offsets
            .iter()
            .map(|&offset| {
                let weak = Weak::clone(&weak);
                let fire_in = request.delay.saturating_sub(Duration::from_secs(offset));
                DelayedTask::spawn(fire_in, async move {
                    if let Some(inner) = weak.upgrade() {
                        inner.send_warning(generation, offset).await;
                    }
                })
            })
            .collect();

        let countdown = {
            let weak = Weak::clone(&weak);
            RepeatingTimer::spawn(COUNTDOWN_TICK, COUNTDOWN_TICK, move |_| {
                let weak = Weak::clone(&weak);
                async move {
                    match weak.upgrade() {
                        Some(inner) => inner.tick(generation).await,
                        None => ControlFlow::Break(()),
                    }
                }
            })
        };

        let execution = DelayedTask::spawn(request.delay, async move {
            if let Some(inner) = weak.upgrade() {
                inner.execute(generation).await;
            }
        });

        state.active = Some(ActiveRestart {
            generation,
            reason: request.reason,
            initiator: request.initiator.clone(),
            detail,
            total_delay_secs: delay_secs,
            remaining_secs: delay_secs,
            deadline,
            requested_at: Utc::now(),
            emergency,
            origin,
            warnings,
            countdown: Some(countdown),
            execution: Some(execution),
        });
        state.phase = RestartPhase::CountingDown;
        state.emergency_active = emergency;

        self.metrics.restart_requested(request.reason);
        self.metrics.remaining_seconds(delay_secs);
        info!(
            "{} scheduled in {} by {} ({} warnings)",
            request.reason,
            format_duration(delay_secs),
            request.initiator,
            offsets.len()
        );

        if emergency {
            let text = render_template(
                &state.settings.messages.emergency_restart,
                Some(delay_secs),
                request.reason,
            );
            self.broadcaster.send_to_all(&text).await;
        }

        let confirmation = format!(
            "{} scheduled in {}",
            request.reason,
            format_duration(delay_secs)
        );
        let severity = if emergency {
            Severity::Emergency
        } else {
            Severity::Info
        };
        self.broadcaster
            .send_to_one(&request.initiator, &confirmation, severity)
            .await;

        Ok(RestartTicket {
            generation,
            reason: request.reason,
            initiator: request.initiator,
            delay_secs,
            warnings: offsets,
            superseded,
        })
    }

    async fn tick(&self, generation: u64) -> ControlFlow<()> {
        let mut state = self.state.lock().await;
        let Some(active) = current_mut(&mut state, generation) else {
            return ControlFlow::Break(());
        };

        active.remaining_secs = active.seconds_until_deadline(Instant::now());
        self.metrics.remaining_seconds(active.remaining_secs);
        ControlFlow::Continue(())
    }

    async fn send_warning(&self, generation: u64, offset: u64) {
        let state = self.state.lock().await;
        let Some(active) = state.active.as_ref().filter(|a| a.generation == generation) else {
            debug!("Dropping stale warning for restart generation {generation}");
            return;
        };

        let text = render_template(
            &state.settings.messages.restart_warning,
            Some(offset),
            active.reason,
        );
        debug!("Restart warning: {text}");
        self.broadcaster.send_to_all(&text).await;
        self.metrics.warning_sent();
    }

    async fn execute(self: Arc<Self>, generation: u64) {
        let mut state = self.state.lock().await;
        let Some(mut active) = state.active.take_if(|a| a.generation == generation) else {
            debug!("Dropping stale execution for restart generation {generation}");
            return;
        };

        let task = active.release_for_execution();
        state.phase = RestartPhase::Executing;
        state.executing = Some(ExecutingRestart { generation, task });
        state.history.push(RestartHistoryEntry::new(
            active.reason,
            active.initiator.clone(),
            active.detail.clone(),
        ));
        state.total_restarts_managed += 1;
        self.metrics.restart_executed(active.reason);

        info!(
            "Executing {} initiated by {} ({})",
            active.reason, active.initiator, active.detail
        );
        let text = render_template(&state.settings.messages.restart_now, None, active.reason);
        self.broadcaster.send_to_all(&text).await;

        let grace = state.settings.grace_period;
        drop(state);

        if !grace.is_zero() {
            tokio::time::sleep(grace).await;
        }

        {
            let mut state = self.state.lock().await;
            if state.executing.as_ref().map(|e| e.generation) != Some(generation) {
                debug!("Restart generation {generation} abandoned during grace period");
                return;
            }
            state.executing = None;
            state.phase = RestartPhase::Idle;
            state.emergency_active = false;
        }

        let mode = active.reason.halt_mode();
        info!("Invoking {mode} halt action");
        if let Err(e) = self.halt_action.execute(mode).await {
            self.metrics.halt_failed();
            error!("Halt action ({mode}) failed: {e}");
        }
    }

    async fn cancel_all(self: &Arc<Self>) -> bool {
        let mut state = self.state.lock().await;
        if state.phase != RestartPhase::CountingDown {
            debug!("Cancel requested with nothing to cancel ({})", state.phase);
            return false;
        }
        let Some(mut active) = state.active.take() else {
            return false;
        };

        active.cancel_timers();
        state.phase = RestartPhase::Idle;
        state.emergency_active = false;
        self.skip_pending_recurring(&mut state, active.origin);
        self.metrics.restart_cancelled();

        info!(
            "Cancelled {} from {} with {} remaining",
            active.reason,
            active.initiator,
            format_duration(active.seconds_until_deadline(Instant::now()))
        );
        let text = state.settings.messages.restart_cancelled.clone();
        self.broadcaster.send_to_all(&text).await;
        true
    }

    /// Push each recurring definition's undelivered occurrence back a day.
    /// A firing still waiting on the lock counts as undelivered, so it is
    /// the one skipped. The definition that produced the cancelled restart
    /// was already delivered and is left alone.
    fn skip_pending_recurring(
        self: &Arc<Self>,
        state: &mut MutexGuard<'_, SchedulerState>,
        origin: Option<RecurringRestart>,
    ) {
        let now = Instant::now();
        let mut rearmed = Vec::with_capacity(state.recurring.len());

        for timer in state.recurring.drain(..) {
            if Some(timer.definition()) == origin {
                rearmed.push(timer);
                continue;
            }

            timer.cancel();
            let skipped = timer.pending_occurrence(now);
            info!("Skipping recurring restart {} for today", timer.definition());
            rearmed.push(self.arm_recurring(
                timer.definition(),
                skipped + crate::recurring_timer::DAY,
                timer.countdown(),
            ));
        }

        state.recurring = rearmed;
    }

    async fn initialize(self: &Arc<Self>) {
        let mut state = self.state.lock().await;
        for timer in state.recurring.drain(..) {
            timer.cancel();
        }

        let wall_now = state.settings.time_zone.now();
        let now = Instant::now();
        let countdown = state.settings.recurring_countdown;
        let definitions = state.settings.recurring.clone();

        for definition in definitions {
            let Some(next) = definition.next_occurrence(&wall_now) else {
                warn!("Recurring restart {definition} has no next occurrence, skipping");
                continue;
            };
            let until = (next - wall_now).to_std().unwrap_or_default();
            info!(
                "Recurring restart {definition} armed, next at {}",
                next.format("%Y-%m-%d %H:%M %:z")
            );
            let timer = self.arm_recurring(definition, now + until, countdown);
            state.recurring.push(timer);
        }

        info!(
            "Restart scheduler initialized with {} recurring restart(s)",
            state.recurring.len()
        );
    }

    fn arm_recurring(
        self: &Arc<Self>,
        definition: RecurringRestart,
        occurrence: Instant,
        countdown: Duration,
    ) -> RecurringTimer {
        let weak = Arc::downgrade(self);
        RecurringTimer::arm(definition, occurrence, countdown, move |occurrence| {
            let weak = Weak::clone(&weak);
            async move {
                let Some(inner) = weak.upgrade() else {
                    return ControlFlow::Break(());
                };
                inner.fire_recurring(definition, occurrence).await;
                ControlFlow::Continue(())
            }
        })
    }

    async fn fire_recurring(self: &Arc<Self>, definition: RecurringRestart, occurrence: Instant) {
        let mut state = self.state.lock().await;
        if let Some(timer) = state
            .recurring
            .iter_mut()
            .find(|timer| timer.definition() == definition)
        {
            timer.mark_delivered(occurrence);
        }

        let delay = occurrence.saturating_duration_since(Instant::now());
        let detail = format!("Scheduled restart at {definition}");

        match self
            .arm_locked(
                &mut state,
                RestartRequest::scheduled(delay),
                detail,
                Some(definition),
            )
            .await
        {
            Ok(ticket) => debug!(
                "Recurring restart {definition} armed as generation {}",
                ticket.generation
            ),
            Err(e) => warn!("Recurring restart {definition} not started: {e}"),
        }
    }

    async fn shutdown(&self) {
        let mut state = self.state.lock().await;

        for timer in state.recurring.drain(..) {
            timer.cancel();
        }
        if let Some(mut active) = state.active.take() {
            active.cancel_timers();
            info!(
                "Shutdown cancelled {} from {}",
                active.reason, active.initiator
            );
        }
        if let Some(executing) = state.executing.take() {
            if let Some(task) = executing.task {
                task.cancel();
            }
            warn!("Shutdown abandoned a restart awaiting its halt action");
        }

        state.phase = RestartPhase::Idle;
        state.emergency_active = false;
        info!("Restart scheduler shut down");
    }
}

fn admit(state: &SchedulerState, request: &RestartRequest) -> SchedulerResult<()> {
    if state.phase == RestartPhase::Executing {
        return Err(SchedulerError::executing());
    }

    match state.active.as_ref() {
        Some(active) if active.emergency && !request.reason.is_emergency() => Err(
            SchedulerError::emergency_active(active.reason, request.reason),
        ),
        _ => Ok(()),
    }
}

/// Deadline for a countdown starting at `now`, or a rejection when the
/// clock cannot represent it.
fn deadline_for(now: Instant, delay: Duration) -> SchedulerResult<Instant> {
    now.checked_add(delay)
        .ok_or_else(|| SchedulerError::delay_out_of_range(delay.as_secs()))
}

fn current_mut(state: &mut SchedulerState, generation: u64) -> Option<&mut ActiveRestart> {
    state
        .active
        .as_mut()
        .filter(|active| active.generation == generation)
}

fn next_scheduled(state: &SchedulerState) -> Option<DateTime<FixedOffset>> {
    let now = Instant::now();
    let wall_now = state.settings.time_zone.now();

    state
        .recurring
        .iter()
        .map(|timer| timer.pending_occurrence(now))
        .min()
        .and_then(|at| TimeDelta::from_std(at.saturating_duration_since(now)).ok())
        .map(|until| wall_now + until)
}
