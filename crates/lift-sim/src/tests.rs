//! Integration tests for lift-sim: the dispatch scenarios, the invariant
//! properties, and the public run API.

use lift_core::{BuildingConfig, Direction, ElevatorId, Floor, GuestId, RequestId, SimRng, Tick};
use lift_elevator::{CarSpec, DestinationRequest, DoorState, Elevator, ElevatorState, RideRequest};
use lift_guest::{Guest, GuestState, LogEntry, TravelMode};

use crate::{
    Building, BuildingBuilder, BuildingSnapshot, Dispatcher, GuestStore, NoopObserver, RunSummary,
    SimError, SimObserver, Spawner,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(num_elevators: u32, capacity: u32, max_guests: u32) -> BuildingConfig {
    BuildingConfig {
        num_floors: 6,
        num_elevators,
        elevator_capacity: capacity,
        door_open_ticks: 2,
        door_close_ticks: 2,
        move_ticks_per_floor: 3,
        idle_poll_ticks: 1,
        max_guests,
        work_time_range: (20, 40),
        mean_interarrival_ticks: 5.0,
        relocation_probability: 0.0,
        no_floor_zero: false,
        seed: 7,
        snapshot_interval_ticks: 0,
        horizon_ticks: Some(200_000),
    }
}

fn manual(config: BuildingConfig) -> Building {
    BuildingBuilder::new(config).auto_spawn(false).build().unwrap()
}

#[derive(Default)]
struct Recorder {
    logs:      Vec<LogEntry>,
    snapshots: Vec<BuildingSnapshot>,
    advances:  Vec<(Tick, Tick)>,
    ended:     Option<RunSummary>,
}

impl SimObserver for Recorder {
    fn on_time_advance(&mut self, from: Tick, to: Tick) {
        self.advances.push((from, to));
    }
    fn on_log(&mut self, entry: &LogEntry) {
        self.logs.push(entry.clone());
    }
    fn on_snapshot(&mut self, _tick: Tick, snapshot: &BuildingSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
    fn on_sim_end(&mut self, _final_tick: Tick, summary: &RunSummary) {
        self.ended = Some(summary.clone());
    }
}

/// Step to completion, checking every invariant before each resumption.
fn run_checked<O: SimObserver>(b: &mut Building, obs: &mut O) -> RunSummary {
    while !b.is_done() {
        assert_eq!(b.check_invariants(), Ok(()), "at {}", b.now());
        if !b.step(obs).unwrap() {
            break;
        }
    }
    assert_eq!(b.check_invariants(), Ok(()));
    b.summary()
}

fn wait_of(b: &Building, guest: GuestId) -> u64 {
    b.log()
        .for_guest(guest)
        .find(|e| e.mode == TravelMode::ElevatorWaiting)
        .map(|e| e.wait_time)
        .expect("guest boarded at least once")
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn second_guest_retries_until_car_returns() {
        let mut b = manual(config(1, 1, 2));
        let first = b.spawn_guest_with_work(Floor(3), 10_000).unwrap();
        let second = b.spawn_guest_with_work(Floor(4), 10_000).unwrap();
        b.run_until(Tick(120), &mut NoopObserver).unwrap();

        assert_eq!(b.summary().rejections, 1);
        assert_eq!(b.guest(first).unwrap().current_floor, Floor(3));
        assert_ne!(b.guest(second).unwrap().state, GuestState::Waiting);
        // Round trip 0 → 3 → 0 at 3 ticks per floor comes on top of the
        // first guest's wait.
        assert!(wait_of(&b, second) > wait_of(&b, first) + 2 * 3 * 3);
    }

    #[test]
    fn placed_car_scans_from_its_floor() {
        let cfg = BuildingConfig { num_floors: 10, ..config(1, 2, 0) };
        let mut b = BuildingBuilder::new(cfg)
            .place_elevator(ElevatorId(0), Floor(5), Direction::Up)
            .build()
            .unwrap();
        b.run_until(Tick(0), &mut NoopObserver).unwrap();
        let car = &b.elevators()[0];
        assert_eq!((car.floor(), car.direction()), (Floor(5), Direction::Down));
        assert_eq!(car.state(), ElevatorState::Moving);
        b.run_until(Tick(3), &mut NoopObserver).unwrap();
        assert_eq!(b.elevators()[0].floor(), Floor(4));
    }

    #[test]
    fn home_call_waits_for_relocation_arrival() {
        let cfg = BuildingConfig {
            num_floors: 5,
            relocation_probability: 1.0,
            work_time_range: (5, 10),
            ..config(2, 2, 6)
        };
        let mut b = BuildingBuilder::new(cfg).build().unwrap();
        let summary = run_checked(&mut b, &mut NoopObserver);
        assert!(summary.completed);

        for g in b.guests().iter() {
            assert_eq!(g.state, GuestState::Left);
            let modes: Vec<_> = b.log().for_guest(g.id).map(|e| e.mode).collect();
            for (i, mode) in modes.iter().enumerate() {
                let expected = if i % 2 == 0 {
                    TravelMode::ElevatorWaiting
                } else {
                    TravelMode::ElevatorDrive
                };
                assert_eq!(*mode, expected, "{}: {modes:?}", g.id);
            }
            assert!(modes.len() % 2 == 0, "{} ended mid-trip: {modes:?}", g.id);
        }
    }

    #[test]
    fn stop_condition_fires_exactly_when_all_left() {
        let mut b = BuildingBuilder::new(config(2, 3, 5)).build().unwrap();
        let mut steps = 0;
        while !b.is_done() {
            assert!(b.left() < 5);
            assert!(b.step(&mut NoopObserver).unwrap(), "ran dry before everyone left");
            steps += 1;
        }
        assert!(steps > 0);
        assert_eq!((b.spawned(), b.left()), (5, 5));

        let final_tick = b.now();
        let summary = b.run(&mut NoopObserver).unwrap();
        assert!(summary.completed);
        assert_eq!(summary.final_tick, final_tick);
    }

    #[test]
    fn lobby_target_never_requests_a_ride() {
        let mut b = manual(config(1, 1, 1));
        b.spawn_guest_with_work(Floor(0), 5).unwrap();
        let summary = b.run(&mut NoopObserver).unwrap();
        assert!(summary.completed);
        assert_eq!(summary.requests_issued, 0);
        assert!(b.log().is_empty());
        assert_eq!(summary.final_tick, Tick(5));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    fn busy_config(seed: u64) -> BuildingConfig {
        BuildingConfig {
            num_floors: 8,
            num_elevators: 3,
            elevator_capacity: 2,
            max_guests: 30,
            work_time_range: (100, 400),
            mean_interarrival_ticks: 3.0,
            relocation_probability: 0.01,
            snapshot_interval_ticks: 25,
            seed,
            ..config(3, 2, 30)
        }
    }

    #[test]
    fn invariants_hold_through_a_busy_run() {
        let mut b = BuildingBuilder::new(busy_config(11)).build().unwrap();
        let mut rec = Recorder::default();
        let summary = run_checked(&mut b, &mut rec);
        assert!(summary.completed);
        assert_eq!(summary.spawned, 30);
        assert!(!rec.snapshots.is_empty());
        for snap in &rec.snapshots {
            assert_eq!(snap.accounted(), snap.spawned, "partition at {}", snap.tick);
            for car in &snap.elevators {
                assert!(car.rider_count <= 2);
                assert_eq!(car.destinations.iter().sum::<u32>(), car.rider_count);
            }
        }
    }

    #[test]
    fn cars_move_shut_and_turn_only_with_nothing_ahead() {
        let cfg = busy_config(17);
        let top = cfg.top_floor();
        let mut b = BuildingBuilder::new(cfg).build().unwrap();
        let (mut moves, mut turns) = (0, 0);

        while !b.is_done() {
            let before: Vec<_> = b
                .elevators()
                .iter()
                .map(|c| (c.floor(), c.direction(), c.door(), c.state()))
                .collect();
            if !b.step(&mut NoopObserver).unwrap() {
                break;
            }
            for (car, &(floor, direction, door, state)) in b.elevators().iter().zip(&before) {
                let here = car.floor();
                if here != floor {
                    moves += 1;
                    // A floor change is the end of a move that began with
                    // the doors shut; they may open only after arrival.
                    assert_eq!(door, DoorState::Closed, "{} left {floor} open", car.id);
                    assert_eq!(state, ElevatorState::Moving, "{} jumped from {floor}", car.id);
                    assert_eq!(floor.step(direction), Some(here), "{} skipped a floor", car.id);
                }
                if car.direction() != direction {
                    turns += 1;
                    let at_end = here.is_ground() || here == top;
                    let ahead = car.dropoffs().iter().any(|d| d.target.is_beyond(here, direction))
                        || b.pickups()
                            .owned_by(car.id)
                            .any(|e| e.request.origin.is_beyond(here, direction));
                    assert!(
                        at_end || !ahead,
                        "{} turned at {here} with work ahead going {direction} ({})",
                        car.id,
                        b.now(),
                    );
                }
            }
        }
        assert!(b.is_done());
        assert!(moves > 0 && turns > 0, "{moves} moves, {turns} turns");
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let mut b = BuildingBuilder::new(busy_config(seed)).build().unwrap();
            let summary = b.run(&mut NoopObserver).unwrap();
            (summary, b.log().entries().to_vec())
        };
        let (a, log_a) = run(5);
        let (b, log_b) = run(5);
        assert_eq!(a, b);
        assert_eq!(log_a, log_b);
    }

    #[test]
    fn every_trip_logs_wait_then_drive() {
        let mut b = BuildingBuilder::new(busy_config(3)).build().unwrap();
        b.run(&mut NoopObserver).unwrap();
        for entry in b.log().entries() {
            match entry.mode {
                TravelMode::ElevatorWaiting => assert_eq!(entry.travel_time, None),
                TravelMode::ElevatorDrive   => assert!(entry.travel_time.unwrap() >= 3),
            }
        }
        assert!(b.log().mean_wait().is_some());
        assert!(b.log().mean_travel().unwrap() >= 3.0);
    }
}

// ── Run API ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_api {
    use super::*;

    #[test]
    fn horizon_stops_the_run() {
        let cfg = BuildingConfig { horizon_ticks: Some(50), ..config(1, 2, 20) };
        let mut rec = Recorder::default();
        let summary = BuildingBuilder::new(cfg).build().unwrap().run(&mut rec).unwrap();
        assert!(!summary.completed);
        assert!(summary.final_tick <= Tick(50));
        assert_eq!(rec.ended, Some(summary));
    }

    #[test]
    fn force_return_all_sends_everyone_home() {
        let mut b = manual(config(2, 3, 3));
        for floor in [2, 3, 4] {
            b.spawn_guest_with_work(Floor(floor), 100_000).unwrap();
        }
        b.run_until(Tick(200), &mut NoopObserver).unwrap();
        assert!(b.guests().iter().all(|g| g.state == GuestState::OnFloor));

        assert_eq!(b.force_return_all(), 3);
        let summary = b.run(&mut NoopObserver).unwrap();
        assert!(summary.completed);
        assert!(summary.final_tick < Tick(1_000));
    }

    #[test]
    fn force_return_single_guest() {
        let mut b = manual(config(1, 2, 2));
        let stay = b.spawn_guest_with_work(Floor(2), 100_000).unwrap();
        let go = b.spawn_guest_with_work(Floor(3), 100_000).unwrap();
        b.run_until(Tick(100), &mut NoopObserver).unwrap();
        b.force_return(go).unwrap();
        b.run_until(Tick(300), &mut NoopObserver).unwrap();
        assert_eq!(b.guest(go).unwrap().state, GuestState::Left);
        assert_eq!(b.guest(stay).unwrap().state, GuestState::OnFloor);

        let err = b.force_return(GuestId(9)).unwrap_err();
        assert!(matches!(err, SimError::UnknownGuest(GuestId(9))));
    }

    #[test]
    fn spawn_outside_building_is_rejected() {
        let mut b = manual(config(1, 1, 1));
        assert!(b.spawn_guest(Floor(6)).is_err());
        assert_eq!(b.spawned(), 0);
    }

    #[test]
    fn snapshots_follow_the_interval() {
        let cfg = BuildingConfig { snapshot_interval_ticks: 10, ..config(1, 2, 3) };
        let mut b = BuildingBuilder::new(cfg).build().unwrap();
        let mut rec = Recorder::default();
        b.run_until(Tick(35), &mut rec).unwrap();
        let ticks: Vec<_> = rec.snapshots.iter().map(|s| s.tick.0).collect();
        assert_eq!(ticks, vec![0, 10, 20, 30]);
        assert!(rec.advances.iter().all(|(from, to)| from < to));
        assert_eq!(rec.logs.len(), b.log().len());
    }

    #[test]
    fn builder_rejects_bad_input() {
        let bad = BuildingConfig { num_elevators: 0, ..config(1, 1, 1) };
        assert!(BuildingBuilder::new(bad).build().is_err());

        let result = BuildingBuilder::new(config(1, 1, 1))
            .place_elevator(ElevatorId(3), Floor(1), Direction::Up)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));

        let result = BuildingBuilder::new(config(1, 1, 1))
            .place_elevator(ElevatorId(0), Floor(60), Direction::Up)
            .build();
        assert!(matches!(result, Err(SimError::Lift(_))));
    }
}

// ── Dispatcher and spawner ────────────────────────────────────────────────────

#[cfg(test)]
mod components {
    use super::*;

    fn cars(n: u32) -> Vec<Elevator> {
        let spec = CarSpec::from_config(&config(n, 2, 0));
        (0..n).map(|i| Elevator::new(ElevatorId(i), spec)).collect()
    }

    #[test]
    fn dispatcher_routes_rides_and_drops_unassigned_destinations() {
        let mut guests = GuestStore::new();
        guests.push(Guest::new(GuestId(0), Floor(3), 10, 1, Tick(0)));
        let mut elevators = cars(2);
        let mut d = Dispatcher::new(SimRng::new(1));

        let dest = DestinationRequest::new(RequestId(0), GuestId(0), Floor(3));
        assert!(d.submit(dest.into()), "first submit wakes the dispatcher");
        let ride = RideRequest::new(RequestId(1), GuestId(0), Floor(0), Direction::Up);
        assert!(!d.submit(ride.into()), "already due");

        assert_eq!(d.dispatch(&mut elevators, &mut guests), 1);
        assert_eq!(d.dropped(), 1);
        let assigned = guests.get(GuestId(0)).unwrap().assigned_elevator.unwrap();
        assert_eq!(elevators[assigned.index()].inbox_len(), 1);
        assert_eq!(elevators.iter().map(Elevator::inbox_len).sum::<usize>(), 1);

        // Once assigned, destinations follow the assignment.
        let dest = DestinationRequest::new(RequestId(2), GuestId(0), Floor(3));
        assert!(d.submit(dest.into()));
        d.dispatch(&mut elevators, &mut guests);
        assert_eq!(elevators[assigned.index()].inbox_len(), 2);
    }

    #[test]
    fn spawner_spreads_targets_by_quota() {
        let cfg = BuildingConfig { num_floors: 3, max_guests: 3, ..config(1, 1, 3) };
        let mut s = Spawner::new(&cfg, SimRng::new(9)).unwrap();
        let mut targets: Vec<_> = (0..3)
            .map(|_| {
                let f = s.draw_target();
                s.assign(f);
                f.0
            })
            .collect();
        targets.sort();
        assert_eq!(targets, vec![0, 1, 2]);
    }

    #[test]
    fn spawner_skips_lobby_when_asked() {
        let cfg = BuildingConfig {
            num_floors: 3,
            max_guests: 4,
            no_floor_zero: true,
            ..config(1, 1, 4)
        };
        let mut s = Spawner::new(&cfg, SimRng::new(9)).unwrap();
        for _ in 0..4 {
            let f = s.draw_target();
            s.assign(f);
        }
        assert_eq!(s.assigned(), &[0, 2, 2]);
        s.reassign(Floor(1), Floor(2));
        assert_eq!(s.assigned(), &[0, 1, 3]);
    }

    #[test]
    fn spawner_gaps_and_work_times() {
        let cfg = BuildingConfig { mean_interarrival_ticks: 10.0, ..config(1, 1, 1) };
        let mut s = Spawner::new(&cfg, SimRng::new(4)).unwrap();
        let n = 4_000;
        let mean = (0..n).map(|_| s.next_gap()).sum::<u64>() as f64 / n as f64;
        // Rounding up adds about half a tick to the exponential mean.
        assert!((9.5..11.5).contains(&mean), "mean gap {mean}");
        assert!((0..100).map(|_| s.draw_work_time()).all(|w| (20..=40).contains(&w)));
    }

    #[test]
    fn store_counts_guests_by_state() {
        let mut guests = GuestStore::new();
        guests.push(Guest::new(GuestId(0), Floor(3), 10, 1, Tick(0)));
        guests.push(Guest::new(GuestId(1), Floor(2), 10, 1, Tick(0)));
        guests.get_mut(GuestId(1)).unwrap().mark_boarded(ElevatorId(0));

        assert_eq!(guests.count(GuestState::Waiting), 1);
        assert_eq!(guests.count(GuestState::InElevator), 1);
        assert_eq!(guests.count(GuestState::Left), 0);
        let total: usize = GuestState::ALL.iter().map(|&s| guests.count(s)).sum();
        assert_eq!(total, guests.len());
    }

    #[test]
    fn fresh_car_is_parked_with_doors_closed() {
        let car = &cars(1)[0];
        assert_eq!(car.door(), DoorState::Closed);
        assert_eq!(car.floor(), Floor::GROUND);
    }
}
