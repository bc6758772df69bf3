//! # tidesync demo
//!
//! A standalone CLI that walks through the replication model:
//! replicas mutate CRDT values independently, exchange state in any order,
//! and converge. The `offline` command routes a disconnected replica's edits
//! through the durable offline queue and drains it once connectivity returns.
//!
//! ## Replica model
//!
//! ```text
//! counters : name → PNCounter      (concurrent increments add up)
//! tags     : ORSet<String>         (add wins over an unobserved remove)
//! title    : LWWRegister<String>   (latest write wins, node id breaks ties)
//! members  : TwoPSet<String>       (revocation is permanent)
//! clock    : VectorClock           (one tick per local edit)
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use colored::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tide_core::{CrdtValue, LWWRegister, ORSet, PNCounter, StateUpdate, TwoPSet, VectorClock};
use tide_queue::{
    JsonFileStorage, OfflineQueue, OperationProcessor, ProcessError, QueueConfigBuilder,
    QueueEvent, QueuedOperation,
};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, watch, Mutex};
use tracing_subscriber::EnvFilter;

// ─── CLI ───────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "tidesync-demo")]
#[command(about = "Offline-first CRDT replication walkthrough (tidesync)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Basic demo: two replicas edit, sync, and converge
    Demo,
    /// Conflict scenario: concurrent edits on three replicas, merge-order independence
    Conflict,
    /// Network partition simulation: split, independent work, heal, full convergence
    Partition,
    /// Offline replica: queue edits, survive a restart, drain over a lossy link
    Offline(OfflineArgs),
}

#[derive(Args)]
struct OfflineArgs {
    /// Local edits made while disconnected
    #[arg(long, default_value_t = 6)]
    edits: usize,

    /// Probability that a single delivery attempt is dropped
    #[arg(long, default_value_t = 0.4)]
    failure_rate: f64,

    /// Attempts per operation before it is given up
    #[arg(long, default_value_t = 5)]
    max_retries: u32,

    /// Base backoff delay in milliseconds (doubles per failed attempt)
    #[arg(long, default_value_t = 50)]
    retry_delay_ms: u64,

    /// Upper bound for a single backoff delay in milliseconds
    #[arg(long)]
    max_retry_delay_ms: Option<u64>,

    /// Outbox snapshot file; defaults to one in the system temp directory
    #[arg(long)]
    state_file: Option<PathBuf>,
}

// ─── Replica: a simulated node holding CRDT values ─────────────────────────

struct Replica {
    id: String,
    clock: VectorClock,
    counters: BTreeMap<String, PNCounter>,
    tags: ORSet<String>,
    title: LWWRegister<String>,
    members: TwoPSet<String>,
}

impl Replica {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            clock: VectorClock::create(id),
            counters: BTreeMap::new(),
            tags: ORSet::new(),
            title: LWWRegister::new(id),
            members: TwoPSet::new(),
        }
    }

    fn tick(&mut self) {
        self.clock = self.clock.increment(&self.id);
    }

    fn increment(&mut self, counter: &str, amount: i64) {
        let current = self.counters.get(counter).cloned().unwrap_or_default();
        self.counters
            .insert(counter.to_string(), current.increment(&self.id, amount));
        self.tick();
    }

    fn decrement(&mut self, counter: &str, amount: u64) {
        let current = self.counters.get(counter).cloned().unwrap_or_default();
        self.counters
            .insert(counter.to_string(), current.decrement(&self.id, amount));
        self.tick();
    }

    fn value(&self, counter: &str) -> i64 {
        self.counters.get(counter).map_or(0, PNCounter::value)
    }

    fn tag(&mut self, label: &str) {
        self.tags = self.tags.add(&self.id, label.to_string());
        self.tick();
    }

    fn untag(&mut self, label: &str) {
        self.tags = self.tags.remove(&label.to_string());
        self.tick();
    }

    fn rename(&mut self, title: &str, timestamp: u64) {
        self.title = self.title.set(title.to_string(), timestamp, self.id.clone());
        self.tick();
    }

    fn invite(&mut self, member: &str) {
        self.members = self.members.add(member.to_string());
        self.tick();
    }

    fn revoke(&mut self, member: &str) {
        self.members = self.members.remove(member.to_string());
        self.tick();
    }

    /// CRDT merge: fold another replica's state into this one.
    fn sync_from(&mut self, other: &Replica) {
        for (name, counter) in &other.counters {
            let merged = match self.counters.get(name) {
                Some(local) => local.merge(counter),
                None => counter.clone(),
            };
            self.counters.insert(name.clone(), merged);
        }
        self.tags = self.tags.merge(&other.tags);
        self.title = self.title.merge(&other.title);
        self.members = self.members.merge(&other.members);
        self.clock = self.clock.merge(&other.clock);
    }

    fn counter_names(&self) -> BTreeSet<&String> {
        self.counters.keys().collect()
    }

    fn tag_list(&self) -> Vec<String> {
        self.tags.elements().cloned().collect()
    }

    fn member_list(&self) -> Vec<String> {
        self.members.elements().cloned().collect()
    }

    /// Observable state, used to compare replicas.
    fn observed(&self) -> (Vec<(String, i64)>, Vec<String>, Option<String>, Vec<String>) {
        let counters = self
            .counters
            .iter()
            .map(|(name, counter)| (name.clone(), counter.value()))
            .collect();
        (
            counters,
            self.tag_list(),
            self.title.value().cloned(),
            self.member_list(),
        )
    }

    /// Snapshot of a single value, keyed the way the offline queue ships it.
    fn update_for(&self, key: &str) -> Option<StateUpdate<String>> {
        let state: CrdtValue<String> = match key.split_once(':') {
            Some(("counter", name)) => self.counters.get(name)?.clone().into(),
            _ if key == "tags" => self.tags.clone().into(),
            _ if key == "title" => self.title.clone().into(),
            _ if key == "members" => self.members.clone().into(),
            _ => return None,
        };
        Some(StateUpdate::new(self.id.clone(), self.clock.clone(), state))
    }
}

// ─── Pretty printing ──────────────────────────────────────────────────────

fn header(text: &str) {
    let bar = "═".repeat(60);
    println!("\n{}", bar.bright_cyan());
    println!("  {}", text.bold().bright_white());
    println!("{}", bar.bright_cyan());
}

fn section(text: &str) {
    println!("\n{} {}", "▸".bright_yellow(), text.bold());
}

fn step(text: &str) {
    println!("  {} {}", "•".bright_green(), text);
}

fn sync_arrow(from: &str, to: &str) {
    println!(
        "  {} {} {} {}",
        from.bright_magenta(),
        "──sync──▶".bright_cyan(),
        to.bright_magenta(),
        "✓".bright_green()
    );
}

fn show_replica(replica: &Replica) {
    let border = "─".repeat(52);
    println!("  ┌{}┐", border);
    println!(
        "  │ {:^50} │",
        format!("Replica: {}", replica.id).bright_yellow().to_string()
    );
    println!("  ├{}┤", border);

    for name in replica.counter_names() {
        let line = format!("{:<14} = {:>6}", name, replica.value(name));
        println!("  │ {:<50} │", line);
    }
    println!("  │ {:<50} │", format!("tags    = {{{}}}", replica.tag_list().join(", ")));
    println!(
        "  │ {:<50} │",
        format!("title   = {}", replica.title.value().map_or("-", String::as_str))
    );
    println!("  │ {:<50} │", format!("members = {{{}}}", replica.member_list().join(", ")));
    let clock = replica
        .clock
        .iter()
        .map(|(node, count)| format!("{node}:{count}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  │ {:<50} │", format!("clock   = [{clock}]").dimmed().to_string());
    println!("  └{}┘", border);
}

fn convergence_check(replicas: &[&Replica]) -> bool {
    match replicas.split_first() {
        Some((base, rest)) => {
            let expected = base.observed();
            rest.iter().all(|replica| replica.observed() == expected)
        }
        None => true,
    }
}

fn convergence_result(converged: bool) {
    if converged {
        println!(
            "\n  {} {}",
            "✓".bright_green().bold(),
            "ALL REPLICAS CONVERGED: observed state is identical"
                .bright_green()
                .bold()
        );
    } else {
        println!(
            "\n  {} {}",
            "✗".bright_red().bold(),
            "DIVERGENCE DETECTED: replicas differ".bright_red().bold()
        );
    }
}

fn describe_order(a: &VectorClock, b: &VectorClock) -> &'static str {
    if a.is_before(b) {
        "happened before"
    } else if b.is_before(a) {
        "happened after"
    } else if a == b {
        "is identical to"
    } else {
        "is concurrent with"
    }
}

// ─── Demo ──────────────────────────────────────────────────────────────────

fn run_demo() {
    header("DEMO: Independent Edits & CRDT Sync");

    section("Phase 1: Two replicas edit independently");
    let mut alice = Replica::new("alice");
    let mut bob = Replica::new("bob");

    alice.increment("page_views", 5);
    alice.increment("page_views", 3);
    step("alice: page_views += 5, += 3");
    alice.tag("draft");
    step("alice: tag 'draft'");
    alice.rename("Release notes", 10);
    step("alice: title = 'Release notes' @10");

    bob.increment("page_views", 10);
    bob.increment("likes", 2);
    step("bob:   page_views += 10, likes += 2");
    bob.tag("docs");
    step("bob:   tag 'docs'");
    bob.invite("carol");
    step("bob:   invite carol");

    show_replica(&alice);
    show_replica(&bob);
    step(&format!(
        "alice's clock {} bob's",
        describe_order(&alice.clock, &bob.clock)
    ));

    section("Phase 2: Bidirectional sync via CRDT merge");
    alice.sync_from(&bob);
    sync_arrow("bob", "alice");
    bob.sync_from(&alice);
    sync_arrow("alice", "bob");

    section("Phase 3: Post-sync state");
    show_replica(&alice);
    show_replica(&bob);

    convergence_result(convergence_check(&[&alice, &bob]));

    section("Final values");
    step(&format!(
        "page_views = {} (alice:8 + bob:10)",
        alice.value("page_views")
    ));
    step(&format!("likes = {} (bob:2)", alice.value("likes")));
}

// ─── Conflict ──────────────────────────────────────────────────────────────

fn run_conflict() {
    header("CONFLICT: Concurrent Updates, Merge-Order Independence");

    section("Phase 0: Shared baseline");
    let mut r1 = Replica::new("node-1");
    r1.tag("urgent");
    r1.invite("dave");
    let mut r2 = Replica::new("node-2");
    let mut r3 = Replica::new("node-3");
    r2.sync_from(&r1);
    r3.sync_from(&r1);
    step("node-1 tags 'urgent' and invites dave; everyone syncs");

    section("Phase 1: Concurrent edits on all three replicas");
    r1.increment("score", 100);
    r1.decrement("score", 10);
    r1.untag("urgent");
    r1.rename("Plan A", 5);
    step("node-1: score += 100, -= 10; untag 'urgent'; title = 'Plan A' @5");

    r2.increment("score", 50);
    r2.tag("urgent");
    r2.rename("Plan B", 5);
    step("node-2: score += 50; re-tag 'urgent' (fresh tag); title = 'Plan B' @5");

    r3.increment("score", 75);
    r3.revoke("dave");
    r3.invite("dave");
    step("node-3: score += 75; revoke dave, then invite dave again");

    step(&format!(
        "node-1's clock {} node-2's",
        describe_order(&r1.clock, &r2.clock)
    ));

    section("Pre-sync (diverged)");
    show_replica(&r1);
    show_replica(&r2);
    show_replica(&r3);

    section("Phase 2: Merge in three different orders");
    let orders: [(&str, [&Replica; 3]); 3] = [
        ("A (r1→r2→r3)", [&r1, &r2, &r3]),
        ("B (r3→r1→r2)", [&r3, &r1, &r2]),
        ("C (r2→r3→r1)", [&r2, &r3, &r1]),
    ];
    let mut merged = Vec::new();
    for (label, sources) in orders {
        let mut target = Replica::new(&format!("order-{}", &label[..1]));
        for source in sources {
            target.sync_from(source);
        }
        step(&format!(
            "Order {}: score={}, tags={:?}, title={:?}",
            label,
            target.value("score"),
            target.tag_list(),
            target.title.value()
        ));
        merged.push(target);
    }

    let refs: Vec<&Replica> = merged.iter().collect();
    section("Merge-order independence");
    convergence_result(convergence_check(&refs));
    let result = &merged[0];
    step(&format!(
        "score = {} (100 + 50 + 75 − 10 = 215)",
        result.value("score")
    ));
    step(&format!(
        "'urgent' tagged = {} (node-2's concurrent add survives node-1's remove)",
        result.tags.lookup(&"urgent".to_string())
    ));
    step(&format!(
        "title = {:?} (same timestamp, higher node id wins)",
        result.title.value()
    ));
    step(&format!(
        "dave is member = {} (revocation is permanent)",
        result.members.lookup(&"dave".to_string())
    ));

    section("Phase 3: Idempotence, merging the same state twice");
    let mut twice = Replica::new("twice");
    twice.sync_from(&merged[0]);
    let before = twice.observed();
    twice.sync_from(&r1);
    twice.sync_from(&r1);
    if before == twice.observed() {
        step("Idempotent ✓  state unchanged after duplicate merges");
    } else {
        step("IDEMPOTENCE FAILURE ✗");
    }

    section("Phase 4: Dynamic merge through CrdtValue");
    let counter: CrdtValue<String> = r1.counters["score"].clone().into();
    let tags: CrdtValue<String> = r2.tags.clone().into();
    match counter.merge(&tags) {
        Ok(_) => step("unexpected: mismatched merge succeeded"),
        Err(err) => step(&format!("rejected as expected: {err}")),
    }
    match serde_json::to_string(&tags) {
        Ok(json) => step(&format!("wire form: {json}")),
        Err(err) => step(&format!("serialization failed: {err}")),
    }
}

// ─── Partition ─────────────────────────────────────────────────────────────

fn run_partition() {
    header("PARTITION: Network Split, Independent Work, Heal & Converge");

    section("Phase 1: Four replicas in two data centers share a baseline");
    let mut east1 = Replica::new("east-1");
    let mut east2 = Replica::new("east-2");
    let mut west1 = Replica::new("west-1");
    let mut west2 = Replica::new("west-2");

    east1.increment("requests", 100);
    east1.tag("healthy");
    for replica in [&mut east2, &mut west1, &mut west2] {
        replica.sync_from(&east1);
    }
    step("Baseline: requests = 100, tag 'healthy', synced to all 4 replicas");

    section("Phase 2: NETWORK PARTITION");
    println!(
        "  {}   {}",
        "╔══════════════════╗".bright_blue(),
        "╔══════════════════╗".bright_red()
    );
    println!(
        "  {}   {}",
        "║  EAST DC         ║".bright_blue(),
        "║  WEST DC         ║".bright_red()
    );
    println!(
        "  {}   {}",
        "║  east-1, east-2  ║".bright_blue(),
        "║  west-1, west-2  ║".bright_red()
    );
    println!(
        "  {}   {}",
        "╚══════════════════╝".bright_blue(),
        "╚══════════════════╝".bright_red()
    );
    println!("  {}", "         ╳╳╳ PARTITION ╳╳╳".bright_red().bold());

    east1.increment("requests", 50);
    east1.increment("errors", 3);
    east2.increment("requests", 30);
    east2.decrement("errors", 1);
    east2.untag("healthy");
    east2.tag("degraded");
    east1.sync_from(&east2);
    east2.sync_from(&east1);
    step("East: +80 requests, errors 3 − 1, 'healthy' → 'degraded'");

    west1.increment("requests", 200);
    west1.increment("latency_spikes", 7);
    west2.increment("requests", 150);
    west2.increment("latency_spikes", 3);
    west2.rename("west on-call", 42);
    west1.sync_from(&west2);
    west2.sync_from(&west1);
    step("West: +350 requests, +10 latency spikes, title set @42");

    section("Pre-heal state");
    show_replica(&east1);
    show_replica(&west1);

    section("Phase 3: PARTITION HEALS");
    println!("  {}", "         ════ HEALED ════".bright_green().bold());

    let mut east_snap = Replica::new("east-snap");
    east_snap.sync_from(&east1);
    let mut west_snap = Replica::new("west-snap");
    west_snap.sync_from(&west1);

    for replica in [&mut east1, &mut east2, &mut west1, &mut west2] {
        replica.sync_from(&east_snap);
        replica.sync_from(&west_snap);
    }
    sync_arrow("east", "west");
    sync_arrow("west", "east");

    section("Phase 4: Post-heal state");
    show_replica(&east1);
    show_replica(&west1);

    convergence_result(convergence_check(&[&east1, &east2, &west1, &west2]));

    step(&format!(
        "requests       = {} (100+50+30+200+150 = 530)",
        east1.value("requests")
    ));
    step(&format!("errors         = {} (3−1 = 2)", east1.value("errors")));
    step(&format!(
        "latency_spikes = {} (7+3 = 10)",
        east1.value("latency_spikes")
    ));
    step(&format!("tags           = {:?}", east1.tag_list()));
}

// ─── Offline ───────────────────────────────────────────────────────────────

/// The remote end of the link. Drops a share of deliveries and merges the
/// rest into its copy of each value.
struct Server {
    failure_rate: f64,
    rng: Mutex<StdRng>,
    values: Mutex<BTreeMap<String, CrdtValue<String>>>,
    seen: Mutex<VectorClock>,
}

impl Server {
    fn new(failure_rate: f64) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
            rng: Mutex::new(StdRng::from_entropy()),
            values: Mutex::new(BTreeMap::new()),
            seen: Mutex::new(VectorClock::new()),
        }
    }
}

#[async_trait]
impl OperationProcessor<StateUpdate<String>> for Server {
    async fn process(&self, op: &QueuedOperation<StateUpdate<String>>) -> Result<bool, ProcessError> {
        if self.rng.lock().await.gen_bool(self.failure_rate) {
            return Err("connection reset by peer".into());
        }

        let update = &op.payload;
        let mut values = self.values.lock().await;
        let merged = match values.get(&op.op_type) {
            Some(current) => update.apply(current)?,
            None => update.state.clone(),
        };
        values.insert(op.op_type.clone(), merged);

        let mut seen = self.seen.lock().await;
        *seen = seen.merge(&update.clock);
        Ok(true)
    }

    fn on_fail(&self, op: &QueuedOperation<StateUpdate<String>>) {
        println!(
            "  {} gave up on {} after {} attempts",
            "✗".bright_red(),
            op.op_type.bright_white(),
            op.retry_count
        );
    }
}

fn print_event(event: &QueueEvent, failed: &mut Vec<String>, ops: &BTreeMap<String, String>) {
    let name = |id: &String| ops.get(id).cloned().unwrap_or_else(|| id.clone());
    match event {
        QueueEvent::Enqueued { id } => step(&format!("queued    {}", name(id))),
        QueueEvent::Started { id } => println!("    {} {}", "→".dimmed(), name(id).dimmed()),
        QueueEvent::Completed { id } => {
            println!("    {} delivered {}", "✓".bright_green(), name(id))
        }
        QueueEvent::Retrying {
            id,
            retry_count,
            delay_ms,
        } => println!(
            "    {} retry #{} of {} in {}ms",
            "↻".bright_yellow(),
            retry_count,
            name(id),
            delay_ms
        ),
        QueueEvent::Failed { id } => failed.push(name(id)),
        QueueEvent::Cancelled { id } => step(&format!("cancelled {}", name(id))),
        QueueEvent::Online => println!("  {}", "● online".bright_green().bold()),
        QueueEvent::Offline => println!("  {}", "○ offline".bright_red().bold()),
    }
}

fn drain_events(
    events: &mut broadcast::Receiver<QueueEvent>,
    failed: &mut Vec<String>,
    ops: &BTreeMap<String, String>,
) {
    loop {
        match events.try_recv() {
            Ok(event) => print_event(&event, failed, ops),
            Err(TryRecvError::Lagged(missed)) => step(&format!("({missed} events skipped)")),
            Err(_) => break,
        }
    }
}

async fn run_offline(args: OfflineArgs) {
    header("OFFLINE: Queue Edits, Restart, Drain Over a Lossy Link");

    let state_file = args
        .state_file
        .unwrap_or_else(|| std::env::temp_dir().join("tidesync-demo-outbox.json"));
    let mut builder = QueueConfigBuilder::new()
        .max_retries(args.max_retries)
        .retry_delay(args.retry_delay_ms)
        .start_online(false)
        .event_capacity(1024);
    if let Some(cap) = args.max_retry_delay_ms {
        builder = builder.max_retry_delay(cap);
    }
    let config = builder.build();
    if let Err(err) = config.validate() {
        println!("  {} {}", "!".bright_red(), err);
        return;
    }

    let storage = Arc::new(JsonFileStorage::new(&state_file));
    let server = Arc::new(Server::new(args.failure_rate));
    let mut phone = Replica::new("phone");
    let mut ops = BTreeMap::new();

    section("Phase 1: Phone is offline and keeps editing");
    let queue = OfflineQueue::<StateUpdate<String>>::restore(
        config.clone(),
        storage.clone(),
        server.clone(),
    )
    .await;
    if !queue.is_empty() {
        step(&format!(
            "{} operation(s) left over from a previous run",
            queue.len()
        ));
        for op in queue.operations() {
            ops.insert(op.id.clone(), format!("{} (earlier run)", op.op_type));
        }
    }

    for edit in 0..args.edits {
        let key = match edit % 3 {
            0 => {
                phone.increment("steps", (edit as i64 + 1) * 100);
                "counter:steps".to_string()
            }
            1 => {
                phone.tag(&format!("walk-{edit}"));
                "tags".to_string()
            }
            _ => {
                phone.rename(&format!("Day {edit}"), edit as u64);
                "title".to_string()
            }
        };
        if let Some(update) = phone.update_for(&key) {
            let op = queue.enqueue(key.clone(), update).await;
            ops.insert(op.id, key);
        }
    }
    step(&format!(
        "{} operation(s) pending, outbox at {}",
        queue.pending_count(),
        state_file.display()
    ));

    section("Phase 2: App restarts before reconnecting");
    drop(queue);
    let queue = OfflineQueue::<StateUpdate<String>>::restore(config, storage, server.clone()).await;
    step(&format!("restored {} operation(s) from disk", queue.len()));

    section("Phase 3: Connectivity returns");
    let mut events = queue.subscribe();
    let mut failed = Vec::new();
    let (signal, rx) = watch::channel(false);
    let watcher = queue.watch_connectivity(rx);
    signal.send_replace(true);
    while !queue.is_online() {
        tokio::task::yield_now().await;
    }
    queue.flush().await;
    drain_events(&mut events, &mut failed, &ops);

    if !failed.is_empty() {
        section("Phase 4: Re-sending the latest state of values that gave up");
        failed.sort();
        failed.dedup();
        for key in &failed {
            let key = key.trim_end_matches(" (earlier run)");
            if let Some(update) = phone.update_for(key) {
                let op = queue.enqueue(key.to_string(), update).await;
                ops.insert(op.id, format!("{key} (resend)"));
            }
        }
        let mut ignored = Vec::new();
        queue.flush().await;
        drain_events(&mut events, &mut ignored, &ops);
    }

    section("Result");
    let values = server.values.lock().await;
    let mut remote = Replica::new("server");
    for (key, value) in values.iter() {
        match (key.split_once(':'), value) {
            (Some(("counter", name)), CrdtValue::PNCounter(counter)) => {
                remote.counters.insert(name.to_string(), counter.clone());
            }
            (_, CrdtValue::ORSet(tags)) => remote.tags = tags.clone(),
            (_, CrdtValue::LWWRegister(title)) => remote.title = title.clone(),
            (_, CrdtValue::TwoPSet(members)) => remote.members = members.clone(),
            _ => {}
        }
    }
    remote.clock = server.seen.lock().await.clone();
    drop(values);

    show_replica(&phone);
    show_replica(&remote);
    convergence_result(convergence_check(&[&phone, &remote]));
    step(&format!("{} operation(s) still queued", queue.len()));

    drop(signal);
    if let Err(err) = watcher.await {
        step(&format!("connectivity watcher stopped: {err}"));
    }
}

// ─── Entry point ───────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Conflict => run_conflict(),
        Commands::Partition => run_partition(),
        Commands::Offline(args) => run_offline(args).await,
    }
}
