mod health_sample;
mod recurring_restart;
mod restart_reason;
mod schedule_time_zone;
