//! # Rollouts
//!
//! Plays whole episodes against a [`PlatformerEnv`] and condenses each one
//! into an [`EpisodeSummary`]. The summary carries a digest of every
//! observation byte, so two runs with the same level, config and seed can be
//! compared at a glance.

use std::sync::Arc;

use anyhow::{ensure, Result};
use level::Level;
use rl::{Action, Env, EnvError, EpisodeConfig, PlatformerEnv, TerminationReason};
use serde::Serialize;

/// Jumps with a fixed probability on every tick.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: fastrand::Rng,
    jump_prob: f64,
}

impl RandomPolicy {
    pub fn new(seed: u64, jump_prob: f64) -> Result<Self> {
        ensure!((0.0..=1.0).contains(&jump_prob), "jump probability {jump_prob} outside [0, 1]");
        Ok(Self {
            rng: fastrand::Rng::with_seed(seed),
            jump_prob,
        })
    }

    pub fn act(&mut self, _observation: &[f32]) -> Action {
        Action::from(self.rng.f64() < self.jump_prob)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: usize,
    pub ticks: u64,
    pub termination: Option<TerminationReason>,
    pub distance: f64,
    pub episode_return: f64,
    pub jumps: u64,
    /// FNV-1a over the raw bytes of every observation, reset included.
    pub digest: u64,
}

/// 64-bit FNV-1a, fed incrementally.
#[derive(Debug, Clone, Copy)]
struct Digest(u64);

impl Digest {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    fn new() -> Self {
        Digest(Self::OFFSET)
    }

    fn update(&mut self, observation: &[f32]) {
        for &byte in bytemuck::cast_slice::<f32, u8>(observation) {
            self.0 = (self.0 ^ u64::from(byte)).wrapping_mul(Self::PRIME);
        }
    }
}

/// Runs one episode to termination.
pub fn run_episode(
    env: &mut PlatformerEnv,
    policy: &mut RandomPolicy,
    episode: usize,
) -> Result<EpisodeSummary, EnvError> {
    let mut digest = Digest::new();
    let mut observation = env.reset();
    digest.update(&observation);
    let mut jumps = 0;
    loop {
        let step = env.step(policy.act(&observation))?;
        digest.update(&step.observation);
        jumps += u64::from(step.info.jumped);
        if step.terminated {
            return Ok(EpisodeSummary {
                episode,
                ticks: step.info.tick,
                termination: step.info.termination,
                distance: step.info.distance,
                episode_return: step.info.episode_return,
                jumps,
                digest: digest.0,
            });
        }
        observation = step.observation;
    }
}

/// Plays `episodes` episodes back to back with one policy.
pub fn run(
    level: Arc<Level>,
    config: EpisodeConfig,
    episodes: usize,
    seed: u64,
    jump_prob: f64,
) -> Result<Vec<EpisodeSummary>> {
    let mut env = PlatformerEnv::new(level, config)?;
    let mut policy = RandomPolicy::new(seed, jump_prob)?;
    let mut summaries = Vec::with_capacity(episodes);
    for episode in 0..episodes {
        let summary = run_episode(&mut env, &mut policy, episode)?;
        tracing::info!(
            episode,
            ticks = summary.ticks,
            termination = ?summary.termination,
            distance = summary.distance,
            episode_return = summary.episode_return,
            digest = format_args!("{:016x}", summary.digest),
            "Episode finished"
        );
        summaries.push(summary);
    }
    Ok(summaries)
}
