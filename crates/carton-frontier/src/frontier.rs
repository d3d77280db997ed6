//! Frontier engine: the two-level worklist traversal.
//!
//! The engine owns one query's state: an outer queue of callables, an inner
//! queue of compiled units per callable, identity-keyed visited sets, and
//! the accumulating module-name set. Per dequeued callable it
//!
//! 1. resolves closure variables and harvests the globals partition
//!    (modules contribute their canonical name, callables are enqueued,
//!    other values go through the provider-name probe);
//! 2. seeds the inner queue with the callable's own compiled body;
//! 3. drains the inner queue, disassembling each unit and classifying every
//!    instruction against the unit's own namespace -- imports are resolved
//!    provider by provider, nested fragments feed the inner queue, and
//!    callables discovered by value feed the outer queue.
//!
//! Every enqueue is guarded by identity membership in the visited sets and
//! the universe of reachable units is finite, so the traversal terminates on
//! cyclic call graphs and shared nested fragments. The output is sorted and
//! deduplicated, so re-running an unchanged query yields the same sequence
//! regardless of discovery order.
//!
//! All state is engine-local: concurrent independent queries over the same
//! environment need no synchronization.
//!
//! Known incompleteness, by design: names unbound at analysis time but bound
//! at call time (and vice versa) are invisible; dynamically evaluated code,
//! string-built import paths, and reflective attribute access are not
//! modeled.

use std::collections::{BTreeSet, HashSet, VecDeque};

use carton_core::env::Environment;
use carton_core::id::{CallableId, ModuleId, UnitId};
use carton_core::value::Value;

use crate::classify::{classify, Classification};
use crate::closure::resolve_closure_vars;
use crate::disasm::disassemble;
use crate::error::FrontierError;
use crate::trace::{TraceEntry, TraceSource};

/// Configuration for a frontier query.
#[derive(Debug, Clone, Default)]
pub struct FrontierConfig {
    /// Whether to record a structured trace of every contribution.
    pub trace_enabled: bool,
}

/// Computes the module frontier of `root` with default configuration.
///
/// Returns the sorted, deduplicated canonical names of every module the
/// callable may need at runtime. This is the primary entry point.
pub fn compute_module_frontier(
    env: &Environment,
    root: CallableId,
) -> Result<Vec<String>, FrontierError> {
    let mut engine = FrontierEngine::new(env, FrontierConfig::default());
    engine.run(root)
}

/// The frontier traversal engine. One instance per query; [`run`](Self::run)
/// resets all state, so reusing an engine is equivalent to a fresh one.
pub struct FrontierEngine<'e> {
    env: &'e Environment,
    config: FrontierConfig,
    /// Callables already expanded or enqueued.
    seen_callables: HashSet<CallableId>,
    /// Units already disassembled or enqueued.
    seen_units: HashSet<UnitId>,
    /// Accumulated canonical module names. Kept ordered so the final
    /// collect is already normalized.
    modules: BTreeSet<String>,
    /// Callables awaiting expansion.
    outer: VecDeque<CallableId>,
    /// Query trace (when enabled).
    trace: Option<Vec<TraceEntry>>,
}

impl<'e> FrontierEngine<'e> {
    pub fn new(env: &'e Environment, config: FrontierConfig) -> Self {
        FrontierEngine {
            env,
            config,
            seen_callables: HashSet::new(),
            seen_units: HashSet::new(),
            modules: BTreeSet::new(),
            outer: VecDeque::new(),
            trace: None,
        }
    }

    /// Runs one frontier query from `root`.
    ///
    /// An unknown root and a unit that fails to decode are hard failures;
    /// import paths that stop resolving contribute their resolved prefix
    /// and the query continues.
    pub fn run(&mut self, root: CallableId) -> Result<Vec<String>, FrontierError> {
        self.seen_callables.clear();
        self.seen_units.clear();
        self.modules.clear();
        self.outer.clear();
        self.trace = self.config.trace_enabled.then(Vec::new);

        self.env.callable(root)?;
        self.seen_callables.insert(root);
        self.outer.push_back(root);

        while let Some(next) = self.outer.pop_front() {
            self.visit_callable(next)?;
        }

        Ok(self.modules.iter().cloned().collect())
    }

    /// Returns the trace of the last query, if tracing was enabled.
    pub fn trace(&self) -> Option<&[TraceEntry]> {
        self.trace.as_deref()
    }

    fn visit_callable(&mut self, id: CallableId) -> Result<(), FrontierError> {
        let env = self.env;
        let vars = resolve_closure_vars(env, id)?;

        // Builtins and unbound names never contribute; the enclosing
        // partition is surfaced by the resolver but recovered through the
        // bytecode scan.
        for (name, value) in vars.globals.iter() {
            match value {
                Value::Module(module) => {
                    let admitted = self.admit_module(*module)?;
                    if self.config.trace_enabled {
                        self.record(
                            TraceSource::ClosureVars { callable: id },
                            format!("global '{}' is bound to a module", name),
                            vec![admitted],
                        );
                    }
                }
                Value::Callable(callable) => {
                    if self.seen_callables.insert(*callable) {
                        let admitted = self.admit_callable_module(*callable)?;
                        self.outer.push_back(*callable);
                        if self.config.trace_enabled {
                            self.record(
                                TraceSource::ClosureVars { callable: id },
                                format!("global '{}' is bound to a callable", name),
                                admitted,
                            );
                        }
                    }
                }
                other => {
                    if let Some(provider) = env.owning_provider(other) {
                        let provider = provider.to_string();
                        self.modules.insert(provider.clone());
                        if self.config.trace_enabled {
                            self.record(
                                TraceSource::ClosureVars { callable: id },
                                format!("global '{}' exposes an owning provider", name),
                                vec![provider],
                            );
                        }
                    }
                }
            }
        }

        let root_unit = env.callable(id)?.unit;
        self.scan_units(root_unit)
    }

    /// Drains the inner worklist seeded with a callable's own body.
    fn scan_units(&mut self, root_unit: UnitId) -> Result<(), FrontierError> {
        let env = self.env;
        let mut inner: VecDeque<UnitId> = VecDeque::new();
        if self.seen_units.insert(root_unit) {
            inner.push_back(root_unit);
        }

        while let Some(unit_id) = inner.pop_front() {
            let unit = env.unit(unit_id)?;
            // The unit's own globals context, not the root callable's.
            let globals = env.namespace(unit.namespace)?;
            let instrs = disassemble(unit)?;

            for (index, instr) in instrs.iter().enumerate() {
                let Some(classification) = classify(instr, globals) else {
                    continue;
                };
                let source = TraceSource::Instruction {
                    unit: unit_id,
                    index,
                };

                match classification {
                    Classification::Import { path } => {
                        // A failed resolution contributes whatever prefix
                        // resolved; the query continues.
                        let chain = match env.import_by_dotted_path(&path) {
                            Ok(chain) => chain,
                            Err(err) => err.resolved,
                        };
                        let mut admitted = Vec::with_capacity(chain.len());
                        for module in chain {
                            admitted.push(self.admit_module(module)?);
                        }
                        if self.config.trace_enabled {
                            self.record(source, format!("import '{}'", path), admitted);
                        }
                    }
                    Classification::NestedUnit(nested) => {
                        if self.seen_units.insert(nested) {
                            inner.push_back(nested);
                            if self.config.trace_enabled {
                                self.record(
                                    source,
                                    format!("nested compiled unit {}", nested),
                                    Vec::new(),
                                );
                            }
                        }
                    }
                    Classification::NestedCallable(callable)
                    | Classification::GlobalCode(callable) => {
                        if self.seen_callables.insert(callable) {
                            let admitted = self.admit_callable_module(callable)?;
                            self.outer.push_back(callable);
                            if self.config.trace_enabled {
                                self.record(
                                    source,
                                    format!("callable {} discovered by value", callable),
                                    admitted,
                                );
                            }
                        }
                    }
                    Classification::GlobalModule(module) => {
                        let admitted = self.admit_module(module)?;
                        if self.config.trace_enabled {
                            self.record(
                                source,
                                "global name is bound to a module".to_string(),
                                vec![admitted],
                            );
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Admits a module's canonical name and returns it (for tracing).
    fn admit_module(&mut self, id: ModuleId) -> Result<String, FrontierError> {
        let name = self.env.module(id)?.name.clone();
        self.modules.insert(name.clone());
        Ok(name)
    }

    /// Admits a callable's owning module, when known.
    fn admit_callable_module(
        &mut self,
        id: CallableId,
    ) -> Result<Vec<String>, FrontierError> {
        match self.env.callable(id)?.module.clone() {
            Some(name) => {
                self.modules.insert(name.clone());
                Ok(vec![name])
            }
            None => Ok(Vec::new()),
        }
    }

    fn record(&mut self, source: TraceSource, detail: String, admitted: Vec<String>) {
        if let Some(trace) = &mut self.trace {
            trace.push(TraceEntry {
                source,
                detail,
                admitted,
            });
        }
    }
}
