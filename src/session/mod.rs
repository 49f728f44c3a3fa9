//! Session orchestration
//!
//! A [`Session`] owns everything that belongs to one visualization: the input
//! elements, the id allocator, the random source, the generated sequence, the
//! [`Player`] walking it and the [`FrameCache`] projecting the step under the
//! cursor.
//!
//! Any parameter change rebuilds the sequence, frame cache and player wholesale.
//! Frames are projected only when asked for, so a rebuild costs one
//! generator run.
//! A rebuild is computed in full before anything is replaced, so a failing
//! change leaves the session as it was.

pub mod errors;
pub mod input;

pub use errors::SessionError;

use crate::algorithms::{self, Algorithm, GeneratorConfig, Mode};
use crate::constants::{DEFAULT_ARRAY_SIZE, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::player::{Player, Speed};
use crate::projection::{Element, FrameCache, IdAllocator};
use crate::roles::{self, Role};
use crate::snapshot::{Step, StepSequence, Value};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Instant;

/// Startup parameters of a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub algorithm: Algorithm,
    /// Size of random inputs
    pub size: usize,
    /// Explicit input; replaces the random array when given
    pub values: Option<Vec<Value>>,
    /// Search target; picked from the array when absent
    pub target: Option<Value>,
    /// Leave an absent target out of the array instead of inserting it
    pub keep_absent: bool,
    /// Seed for a reproducible session
    pub seed: Option<u64>,
    pub speed: Speed,
    pub generator: GeneratorConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            algorithm: Algorithm::Bubble,
            size: DEFAULT_ARRAY_SIZE,
            values: None,
            target: None,
            keep_absent: false,
            seed: None,
            speed: Speed::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Input chosen for the next rebuild
struct Candidate {
    algorithm: Algorithm,
    elements: Vec<Element>,
    target: Option<Value>,
    explicit_input: bool,
}

pub struct Session {
    algorithm: Algorithm,
    elements: Vec<Element>,
    target: Option<Value>,
    /// The input came from the user and must not be regenerated implicitly
    explicit_input: bool,
    keep_absent: bool,
    generator: GeneratorConfig,
    rng: StdRng,
    ids: IdAllocator,
    frames: FrameCache,
    player: Player,
    notice: Option<String>,
}

impl Session {
    pub fn new(config: SessionConfig, now: Instant) -> Result<Self, SessionError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut ids = IdAllocator::new();
        let mut notice = None;

        let (elements, explicit_input) = match &config.values {
            Some(values) => {
                check_size(values.len())?;
                (ids.elements(values), true)
            }
            None => {
                check_size(config.size)?;
                let mut size = config.size;
                if config.algorithm == Algorithm::Bitonic {
                    size = bitonic_adjust(size, &mut notice);
                }
                (input::random_elements(&mut rng, &mut ids, size), false)
            }
        };

        let mut candidate = Candidate {
            algorithm: config.algorithm,
            elements,
            target: config.target,
            explicit_input,
        };
        if config.algorithm.mode() == Mode::Search {
            settle_target(&mut rng, &mut ids, &mut candidate, config.keep_absent);
        }

        let sequence = build(&candidate, &config.generator, &mut rng)?;
        let frames = FrameCache::new(candidate.elements.clone(), ids.clone());
        tracing::info!(
            algorithm = candidate.algorithm.id(),
            size = candidate.elements.len(),
            seed = ?config.seed,
            "session started"
        );

        Ok(Session {
            algorithm: candidate.algorithm,
            elements: candidate.elements,
            target: candidate.target,
            explicit_input: candidate.explicit_input,
            keep_absent: config.keep_absent,
            generator: config.generator,
            rng,
            ids,
            frames,
            player: Player::new(sequence, config.speed, now),
            notice,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn mode(&self) -> Mode {
        self.algorithm.mode()
    }

    /// Number of input elements
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn values(&self) -> Vec<Value> {
        self.elements.iter().map(|element| element.value).collect()
    }

    pub fn target(&self) -> Option<Value> {
        self.target
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn sequence(&self) -> &StepSequence {
        self.player.sequence()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.player.current()
    }

    /// Projected elements of the current step, projecting it if needed
    pub fn current_frame(&mut self) -> &[Element] {
        self.frames
            .frame_at(self.player.sequence(), self.player.cursor())
    }

    /// Bytes held by projected frames
    pub fn frame_memory(&self) -> usize {
        self.frames.memory_usage()
    }

    /// Role of every bar in the current frame
    pub fn current_roles(&self) -> Vec<Role> {
        match self.player.current() {
            Some(step) => roles::roles(step),
            None => vec![Role::Normal; self.elements.len()],
        }
    }

    /// Take the pending user-visible notice, if any
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.player.set_speed(speed);
    }

    /// Fresh random input at the current size
    pub fn reset(&mut self, now: Instant) -> Result<(), SessionError> {
        let size = self.elements.len().max(MIN_ARRAY_SIZE);
        self.regenerate(self.algorithm, size, now)
    }

    /// Shuffle the current input; elements keep their ids
    pub fn shuffle(&mut self, now: Instant) -> Result<(), SessionError> {
        let mut elements = self.elements.clone();
        elements.shuffle(&mut self.rng);
        let mut candidate = Candidate {
            algorithm: self.algorithm,
            elements,
            target: self.target,
            explicit_input: self.explicit_input,
        };
        if self.mode() == Mode::Search {
            candidate.target = input::pick_target(&mut self.rng, &candidate.elements);
        }
        self.commit(candidate, now)
    }

    /// Switch algorithm on the same input. Bitonic sort on random input
    /// regenerates it at a power-of-two size.
    pub fn set_algorithm(&mut self, algorithm: Algorithm, now: Instant) -> Result<(), SessionError> {
        if algorithm == Algorithm::Bitonic
            && !self.explicit_input
            && !self.elements.len().is_power_of_two()
        {
            return self.regenerate(algorithm, self.elements.len(), now);
        }

        let mut candidate = Candidate {
            algorithm,
            elements: self.elements.clone(),
            target: self.target,
            explicit_input: self.explicit_input,
        };
        if algorithm.mode() == Mode::Search {
            settle_target(&mut self.rng, &mut self.ids, &mut candidate, self.keep_absent);
        }
        self.commit(candidate, now)
    }

    /// Switch mode; the mode's default algorithm is selected
    pub fn set_mode(&mut self, mode: Mode, now: Instant) -> Result<(), SessionError> {
        self.set_algorithm(mode.default_algorithm(), now)
    }

    /// Regenerate random input of `size` elements, clamped to the supported range
    pub fn set_size(&mut self, size: usize, now: Instant) -> Result<(), SessionError> {
        let size = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
        self.regenerate(self.algorithm, size, now)
    }

    /// Set the search target. An absent target is inserted at a random
    /// position unless the session keeps absent targets.
    pub fn set_target(&mut self, target: Value, now: Instant) -> Result<(), SessionError> {
        let mut candidate = Candidate {
            algorithm: self.algorithm,
            elements: self.elements.clone(),
            target: Some(target),
            explicit_input: self.explicit_input,
        };
        if self.mode() == Mode::Search && !self.keep_absent {
            input::ensure_present(&mut self.rng, &mut self.ids, &mut candidate.elements, target);
        }
        self.commit(candidate, now)
    }

    fn regenerate(&mut self, algorithm: Algorithm, size: usize, now: Instant) -> Result<(), SessionError> {
        check_size(size)?;
        let mut notice = None;
        let size = if algorithm == Algorithm::Bitonic {
            bitonic_adjust(size, &mut notice)
        } else {
            size
        };

        let mut candidate = Candidate {
            algorithm,
            elements: input::random_elements(&mut self.rng, &mut self.ids, size),
            target: self.target,
            explicit_input: false,
        };
        if algorithm.mode() == Mode::Search {
            candidate.target = input::pick_target(&mut self.rng, &candidate.elements);
        }

        self.commit(candidate, now)?;
        if notice.is_some() {
            self.notice = notice;
        }
        Ok(())
    }

    /// Generate and project `candidate`, then replace the current state
    fn commit(&mut self, candidate: Candidate, now: Instant) -> Result<(), SessionError> {
        let sequence = build(&candidate, &self.generator, &mut self.rng)?;

        self.player.cancel(now);
        let speed = self.player.speed();
        self.player = Player::new(sequence, speed, now);
        self.frames = FrameCache::new(candidate.elements.clone(), self.ids.clone());
        self.algorithm = candidate.algorithm;
        self.elements = candidate.elements;
        self.target = candidate.target;
        self.explicit_input = candidate.explicit_input;

        tracing::info!(
            algorithm = self.algorithm.id(),
            size = self.elements.len(),
            target = ?self.target,
            steps = self.player.len(),
            "session rebuilt"
        );
        Ok(())
    }
}

fn check_size(size: usize) -> Result<(), SessionError> {
    if (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(SessionError::InvalidSize {
            size,
            min: MIN_ARRAY_SIZE,
            max: MAX_ARRAY_SIZE,
        })
    }
}

/// Round a random input size to one bitonic sort accepts, leaving a notice
/// when it changes
fn bitonic_adjust(size: usize, notice: &mut Option<String>) -> usize {
    let adjusted = input::bitonic_size(size);
    if adjusted != size {
        tracing::warn!(requested = size, adjusted, "bitonic sort size adjusted");
        *notice = Some(format!(
            "Bitonic Sort requires array size to be a power of two. Adjusted to {}.",
            adjusted
        ));
    }
    adjusted
}

/// Make sure a search candidate has a usable target
fn settle_target(rng: &mut StdRng, ids: &mut IdAllocator, candidate: &mut Candidate, keep_absent: bool) {
    match candidate.target {
        Some(target) if !keep_absent => {
            input::ensure_present(rng, ids, &mut candidate.elements, target);
        }
        Some(_) => {}
        None => candidate.target = input::pick_target(rng, &candidate.elements),
    }
}

fn build(
    candidate: &Candidate,
    generator: &GeneratorConfig,
    rng: &mut StdRng,
) -> Result<StepSequence, SessionError> {
    let values: Vec<Value> = candidate.elements.iter().map(|e| e.value).collect();
    Ok(algorithms::generate(candidate.algorithm, &values, candidate.target, generator, rng)?)
}
