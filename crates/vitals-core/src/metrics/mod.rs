//! Minimal metrics registry with Prometheus text exposition.
//!
//! Counters declare their label schema once at registration; series are
//! backed by `DashMap` keyed by the label-value tuple, each holding an
//! atomic cell, so handlers update them without touching the registry lock.
//! Rendering walks metrics in registration order and sorts counter series
//! so two renders without intervening writes are byte-identical.

use std::collections::HashSet;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;

use crate::error::{Result, VitalsError};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Helper to escape help text (backslash and newline only).
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Monotonic counter partitioned by a fixed label schema.
///
/// Each distinct label-value tuple is an independent series, created at
/// zero on first observation. Counts never decrease.
pub struct Counter {
    name: String,
    help: String,
    label_names: Vec<String>,
    series: DashMap<Vec<String>, AtomicU64>,
}

impl Counter {
    fn new(name: &str, help: &str, label_names: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            help: help.to_string(),
            label_names: label_names.iter().map(|s| s.to_string()).collect(),
            series: DashMap::new(),
        }
    }

    /// Increment by 1.
    pub fn inc(&self, label_values: &[&str]) -> Result<()> {
        self.add(label_values, 1)
    }

    /// Increment by an arbitrary value.
    ///
    /// `label_values` must match the declared label names in order and
    /// arity; a mismatch is a programmer error surfaced as `LabelArity`.
    pub fn add(&self, label_values: &[&str], v: u64) -> Result<()> {
        if label_values.len() != self.label_names.len() {
            return Err(VitalsError::LabelArity {
                metric: self.name.clone(),
                expected: self.label_names.len(),
                got: label_values.len(),
            });
        }
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        let cell = self.series.entry(key).or_insert_with(|| AtomicU64::new(0));
        cell.fetch_add(v, Ordering::Relaxed);
        Ok(())
    }

    /// Point-in-time value of one series; 0 if never observed.
    pub fn get(&self, label_values: &[&str]) -> u64 {
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        self.series
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render HELP/TYPE comment lines plus one line per observed series.
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, escape_help(&self.help));
        let _ = writeln!(out, "# TYPE {} counter", self.name);
        let mut rows: Vec<(Vec<String>, u64)> = self
            .series
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();
        for (values, count) in rows {
            let label_str = self
                .label_names
                .iter()
                .zip(values.iter())
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", self.name, label_str, count);
        }
    }
}

/// Gauge holding a single point-in-time reading.
///
/// The value is stored as the bit pattern of an `f64` in an `AtomicU64`, so
/// sets and reads are atomic without a lock.
#[derive(Debug)]
pub struct Gauge {
    name: String,
    help: String,
    bits: AtomicU64,
}

impl Gauge {
    fn new(name: &str, help: &str) -> Self {
        Self {
            name: name.to_string(),
            help: help.to_string(),
            bits: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// Overwrite the current value unconditionally.
    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    /// Last value set (0.0 before the first set).
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Render HELP/TYPE comment lines plus one unlabeled value line.
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, escape_help(&self.help));
        let _ = writeln!(out, "# TYPE {} gauge", self.name);
        let _ = writeln!(out, "{} {}", self.name, self.get());
    }
}

enum Metric {
    Counter(Arc<Counter>),
    Gauge(Arc<Gauge>),
}

/// Ordered collection of metrics with process-unique names.
///
/// Built once at startup and handed to whatever records or renders;
/// registration is mutex-guarded, increments and sets bypass the lock.
#[derive(Default)]
pub struct Registry {
    inner: Mutex<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    metrics: Vec<Metric>,
    names: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a counter with a fixed label schema.
    pub fn register_counter(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
    ) -> Result<Arc<Counter>> {
        let counter = Arc::new(Counter::new(name, help, label_names));
        self.insert(name, Metric::Counter(Arc::clone(&counter)))?;
        Ok(counter)
    }

    /// Register a gauge.
    pub fn register_gauge(&self, name: &str, help: &str) -> Result<Arc<Gauge>> {
        let gauge = Arc::new(Gauge::new(name, help));
        self.insert(name, Metric::Gauge(Arc::clone(&gauge)))?;
        Ok(gauge)
    }

    fn insert(&self, name: &str, metric: Metric) -> Result<()> {
        let mut inner = self.locked();
        if !inner.names.insert(name.to_string()) {
            return Err(VitalsError::DuplicateMetric(name.to_string()));
        }
        inner.metrics.push(metric);
        Ok(())
    }

    /// Render every registered metric in registration order. Never fails;
    /// the output reflects whatever updates have been applied at the
    /// instant of rendering.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for m in &self.locked().metrics {
            match m {
                Metric::Counter(c) => c.render(&mut out),
                Metric::Gauge(g) => g.render(&mut out),
            }
        }
        out
    }

    fn locked(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
