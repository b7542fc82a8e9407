//! Walks through the five ready-made queues.
//!
//! Run with `RUST_LOG=u_prioheap=trace` to see heap operations.

use tracing_subscriber::EnvFilter;
use u_prioheap::queues::{AlertSystem, ElevatorDispatcher, EventScheduler, TaskQueue, TriageQueue};
use u_prioheap::HeapError;

fn main() -> Result<(), HeapError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    tasks()?;
    events()?;
    alerts()?;
    triage()?;
    elevator();
    Ok(())
}

fn tasks() -> Result<(), HeapError> {
    println!("== Task queue ==");
    let mut tasks = TaskQueue::new();
    let data = [
        (3.0, "Review logs"),
        (8.0, "Update firmware"),
        (5.0, "Reset router"),
        (10.0, "Restore database"),
        (1.0, "Hardware inventory"),
        (7.0, "Configure VLAN"),
        (2.0, "Answer support ticket"),
        (9.0, "Optimize routing"),
        (4.0, "Security audit"),
        (6.0, "Connectivity tests"),
    ];
    for (p, d) in data {
        tasks.add_task(p, d)?;
    }
    println!("Most urgent (peek): {:?}", tasks.peek());
    while let Some((priority, description)) = tasks.process_task() {
        println!("Processing: {description} (priority {priority})");
    }
    Ok(())
}

fn events() -> Result<(), HeapError> {
    println!("\n== Event scheduler ==");
    let mut scheduler = EventScheduler::new();
    scheduler.add_event(20230515, "Client meeting")?;
    scheduler.add_event(20230420, "Conference")?;
    scheduler.add_event(20230610, "Project delivery")?;
    scheduler.add_event(20230301, "Annual planning")?;

    println!("Next event (peek): {:?}", scheduler.peek_event());
    while let Some((date, name)) = scheduler.next_event() {
        println!("-> {name} (date {date})");
    }
    Ok(())
}

fn alerts() -> Result<(), HeapError> {
    println!("\n== Alert system ==");
    let alerts = AlertSystem::new();
    for (severity, symbol) in [(4.0, "ALFA"), (2.0, "TUL"), (5.0, "GOLF"), (3.0, "OSCAR")] {
        alerts.insert_alert(severity, symbol)?;
        println!("After {symbol}: critical alert {:?}", alerts.highest_alert());
    }
    if let Err(err) = alerts.insert_alert(150.0, "X") {
        println!("Rejected: {err}");
    }
    while let Some((severity, symbol)) = alerts.extract_alert() {
        println!("Handled {symbol} (severity {severity}); next: {:?}", alerts.highest_alert());
    }
    println!("No alerts left.");
    Ok(())
}

fn triage() -> Result<(), HeapError> {
    println!("\n== Triage ==");
    let mut pq = TriageQueue::new();
    pq.insert(5, "Lucía")?;
    pq.insert(3, "Pedro")?;
    pq.insert(10, "Jorge")?;
    pq.insert(7, "María")?;

    println!("Most urgent: {:?}", pq.peek_max());
    println!("Treated: {:?}", pq.extract_max());
    println!("Next: {:?}", pq.peek_max());
    pq.update_priority("Pedro", 9)?;
    println!("After Pedro worsens: {:?}", pq.peek_max());
    println!("Treated: {:?}", pq.extract_max());
    println!("Waiting: {:?}", pq.remaining());
    Ok(())
}

fn elevator() {
    println!("\n== Elevator ==");
    let mut elevator = ElevatorDispatcher::new(5);
    for floor in [2, 8, 3, 10, 4] {
        elevator.request_floor(floor);
        println!("Requested floor {floor}. Next without moving: {:?}", elevator.peek_next());
    }
    while let Some(floor) = elevator.next_stop() {
        println!("Stop at floor {floor} (car now at {})", elevator.current_floor());
    }
    println!("No requests left.");
}
