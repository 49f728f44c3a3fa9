// Per-index display roles derived from a step

use crate::snapshot::{Mark, Probe, SearchStatus, Step, StepEvent};
use std::fmt;

/// What a bar represents at one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Normal,
    Comparing,
    Swapped,
    Sorted,
    Pivot,
    Minimum,
    Merging,
    Current,
    Found,
    Path,
    LeftBound,
    RightBound,
    Flipping,
    Digit,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Normal => "Normal",
            Role::Comparing => "Comparing",
            Role::Swapped => "Swapped",
            Role::Sorted => "Sorted",
            Role::Pivot => "Pivot",
            Role::Minimum => "Min",
            Role::Merging => "Merging",
            Role::Current => "Current",
            Role::Found => "Found",
            Role::Path => "Path",
            Role::LeftBound => "Left",
            Role::RightBound => "Right",
            Role::Flipping => "Flipping",
            Role::Digit => "Digit",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the role of every index of `step.array`.
///
/// Roles are painted from the lowest priority up, so a later layer wins:
///
/// - sorts: digit < comparing / swapped pair < pivot < merging range <
///   flipping < minimum < sorted
/// - searches: left / right bound < path < current < found
pub fn roles(step: &Step) -> Vec<Role> {
    let mut roles = vec![Role::Normal; step.array.len()];
    match step.event.probe() {
        Some(probe) => paint_search(&mut roles, probe),
        None => paint_sort(&mut roles, step),
    }
    roles
}

fn paint(roles: &mut [Role], index: usize, role: Role) {
    if let Some(slot) = roles.get_mut(index) {
        *slot = role;
    }
}

fn paint_range(roles: &mut [Role], (start, end): (usize, usize), role: Role) {
    for index in start..=end {
        paint(roles, index, role);
    }
}

fn paint_sort(roles: &mut [Role], step: &Step) {
    let event = &step.event;

    if let StepEvent::Distribute { source, .. } = event {
        paint(roles, *source, Role::Digit);
    }

    if let Some((a, b)) = event.pair() {
        let role = if event.is_swap() {
            Role::Swapped
        } else {
            Role::Comparing
        };
        paint(roles, a, role);
        paint(roles, b, role);
    }
    if let StepEvent::Place { index, .. } = event {
        paint(roles, *index, Role::Current);
    }

    if let Some(Mark::Pivot(index)) = event.mark() {
        paint(roles, index, Role::Pivot);
    }

    if let StepEvent::Merge { range, .. } = event {
        paint_range(roles, *range, Role::Merging);
    }

    if let StepEvent::Flip { range } = event {
        paint_range(roles, *range, Role::Flipping);
    }

    if let Some(Mark::Minimum(index)) = event.mark() {
        paint(roles, index, Role::Minimum);
    }

    for &index in &step.settled {
        paint(roles, index, Role::Sorted);
    }
}

fn paint_search(roles: &mut [Role], probe: &Probe) {
    if let Some((left, right)) = probe.bounds {
        paint(roles, left, Role::LeftBound);
        paint(roles, right, Role::RightBound);
    }
    for &index in &probe.path {
        paint(roles, index, Role::Path);
    }
    if let Some(current) = probe.current {
        paint(roles, current, Role::Current);
    }
    if let SearchStatus::Found(index) = probe.status {
        paint(roles, index, Role::Found);
    }
}
