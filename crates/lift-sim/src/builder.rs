//! Fluent builder for constructing a [`Building`].

use lift_core::{BuildingConfig, Direction, ElevatorId, Floor, LiftError, SimClock, SimRng, Tick};
use lift_elevator::{CarSpec, CarWake, Elevator, PickupQueue};
use lift_event::Scheduler;

use crate::process::Resume;
use crate::{Building, Dispatcher, EventLog, GuestStore, SimError, SimResult, Spawner};

/// RNG stream offsets derived from the master seed.
const SPAWNER_STREAM: u64 = 1;
const DISPATCHER_STREAM: u64 = 2;

/// Fluent builder for [`Building`].
///
/// # Optional inputs (have defaults)
///
/// | Method                          | Default                              |
/// |---------------------------------|--------------------------------------|
/// | `.auto_spawn(bool)`             | `true`: the spawner process runs     |
/// | `.place_elevator(id, f, dir)`   | every car at floor 0 scanning up     |
/// | `.clock(c)`                     | `SimClock::default()` (08:00)        |
///
/// # Example
///
/// ```rust,ignore
/// let mut building = BuildingBuilder::new(BuildingConfig::default()).build()?;
/// let summary = building.run(&mut NoopObserver)?;
/// ```
pub struct BuildingBuilder {
    config:     BuildingConfig,
    auto_spawn: bool,
    placements: Vec<(ElevatorId, Floor, Direction)>,
    clock:      Option<SimClock>,
}

impl BuildingBuilder {
    pub fn new(config: BuildingConfig) -> Self {
        Self { config, auto_spawn: true, placements: Vec::new(), clock: None }
    }

    /// Disable the built-in spawner so guests arrive only through
    /// [`Building::spawn_guest`].
    pub fn auto_spawn(mut self, on: bool) -> Self {
        self.auto_spawn = on;
        self
    }

    /// Start car `id` on `floor` heading `direction` instead of parked at the
    /// lobby.
    pub fn place_elevator(mut self, id: ElevatorId, floor: Floor, direction: Direction) -> Self {
        self.placements.push((id, floor, direction));
        self
    }

    pub fn clock(mut self, clock: SimClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validate inputs, create the cars, and schedule the initial
    /// resumptions.  Cars start at tick 0 in ascending id order, which fixes
    /// the tie-break between them for the rest of the run.
    pub fn build(self) -> SimResult<Building> {
        self.config.validate()?;
        let config = self.config;

        let spec = CarSpec::from_config(&config);
        let mut elevators: Vec<Elevator> = (0..config.num_elevators)
            .map(|i| Elevator::new(ElevatorId(i), spec))
            .collect();
        for (id, floor, direction) in self.placements {
            if !config.contains(floor) {
                return Err(LiftError::FloorOutOfRange { floor, num_floors: config.num_floors }.into());
            }
            let Some(slot) = elevators.get_mut(id.index()) else {
                return Err(SimError::Config(format!(
                    "cannot place {id}: building has {} elevators",
                    config.num_elevators
                )));
            };
            *slot = Elevator::new(id, spec).with_position(floor, direction);
        }

        let mut master = SimRng::new(config.seed);
        let mut spawner = Spawner::new(&config, master.child(SPAWNER_STREAM))?;
        let dispatcher = Dispatcher::new(master.child(DISPATCHER_STREAM));

        let mut scheduler = Scheduler::new(self.clock.unwrap_or_default());
        for car in &elevators {
            scheduler.schedule_now(Resume::Car(car.id, CarWake::Start));
        }
        if self.auto_spawn && config.max_guests > 0 {
            scheduler.schedule_after(spawner.next_gap(), Resume::Spawner);
        }

        Ok(Building {
            config,
            scheduler,
            guests: GuestStore::new(),
            elevators,
            pickups: PickupQueue::new(),
            dispatcher,
            spawner,
            log: EventLog::new(),
            left: 0,
            next_request: 0,
            rejections: 0,
            next_snapshot: Tick::ZERO,
        })
    }
}
