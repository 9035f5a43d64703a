//! Deferred asynchronous computations.
//!
//! A [`Task<A>`] describes how to produce an `A` asynchronously without
//! producing it yet. Nothing runs until [`Task::run`] is called and the
//! returned future is awaited. Every call to `run` starts the computation
//! afresh; results are not cached.
//!
//! A task never fails by its own contract. Work that can fail is modelled as
//! `Task<Result<A, E>>`, which every combinator here supports unchanged.
//!
//! # Racing
//!
//! [`Task::race`] starts two tasks concurrently and settles with whichever
//! finishes first. The loser's future is dropped at that point, so it makes
//! no further progress unless it spawned work of its own. Racing is
//! associative, which makes it the [`Semigroup::race`] instance, and
//! [`Task::never`] is its identity, which makes it [`Monoid::race`].
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use fpkit::effect::Task;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let slow = Task::of("a").delay(Duration::from_millis(20));
//! let fast = Task::of("b").delay(Duration::from_millis(10));
//!
//! assert_eq!(slow.race(&fast).run().await, "b");
//! # }
//! ```

use std::fmt;
use std::future::{self, Future};
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use crate::typeclass::{Monoid, Semigroup};

type TaskFunction<A> = dyn Fn() -> BoxFuture<'static, A> + Send + Sync;

/// A lazily started, re-runnable asynchronous computation producing `A`.
pub struct Task<A> {
    start: Arc<TaskFunction<A>>,
}

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Self {
            start: Arc::clone(&self.start),
        }
    }
}

impl<A> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Task").finish_non_exhaustive()
    }
}

impl<A> Task<A> {
    /// Starts the computation, returning the future that completes with its
    /// value.
    #[inline]
    #[must_use]
    pub fn run(&self) -> BoxFuture<'static, A> {
        (self.start)()
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Creates a task from a function producing a fresh future per run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use fpkit::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let runs = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&runs);
    /// let task = Task::new(move || {
    ///     let counter = Arc::clone(&counter);
    ///     async move { counter.fetch_add(1, Ordering::SeqCst) + 1 }
    /// });
    ///
    /// assert_eq!(runs.load(Ordering::SeqCst), 0);
    /// assert_eq!(task.run().await, 1);
    /// assert_eq!(task.run().await, 2);
    /// # }
    /// ```
    #[must_use]
    pub fn new<F, Fut>(computation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            start: Arc::new(move || computation().boxed()),
        }
    }

    /// A task that immediately produces a clone of `value`.
    #[must_use]
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move || future::ready(value.clone()))
    }

    /// A task that never completes.
    #[must_use]
    pub fn never() -> Self {
        Self::new(future::pending)
    }

    /// Waits for `duration` before starting this task.
    #[must_use]
    pub fn delay(&self, duration: Duration) -> Self {
        let task = self.clone();
        Self::new(move || {
            let task = task.clone();
            async move {
                tokio::time::sleep(duration).await;
                task.run().await
            }
        })
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the produced value.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> Task<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let task = self.clone();
        let function = Arc::new(function);
        Task::new(move || {
            let started = task.run();
            let function = Arc::clone(&function);
            async move { function(started.await) }
        })
    }

    /// Runs the task returned by `function` after this one completes.
    #[must_use]
    pub fn flat_map<B, F>(&self, function: F) -> Task<B>
    where
        B: Send + 'static,
        F: Fn(A) -> Task<B> + Send + Sync + 'static,
    {
        let task = self.clone();
        let function = Arc::new(function);
        Task::new(move || {
            let started = task.run();
            let function = Arc::clone(&function);
            async move { function(started.await).run().await }
        })
    }

    /// Runs both tasks concurrently and produces whichever value is ready
    /// first. When both are ready at the same poll the winner is unspecified.
    #[must_use]
    pub fn race(&self, other: &Self) -> Self {
        let first = self.clone();
        let second = other.clone();
        Self::new(move || {
            let first = first.run();
            let second = second.run();
            async move {
                tokio::select! {
                    value = first => {
                        tracing::trace!(winner = "first", "task race settled");
                        value
                    }
                    value = second => {
                        tracing::trace!(winner = "second", "task race settled");
                        value
                    }
                }
            }
        })
    }
}

impl Task<()> {
    /// A task that completes after `duration`.
    #[must_use]
    pub fn sleep(duration: Duration) -> Self {
        Self::new(move || tokio::time::sleep(duration))
    }
}

impl<A: Send + 'static> Semigroup<Task<A>> {
    /// Combines tasks with [`Task::race`].
    #[must_use]
    pub fn race() -> Self {
        Self::new(|first: Task<A>, second: Task<A>| first.race(&second))
    }
}

impl<A: Send + 'static> Monoid<Task<A>> {
    /// Combines tasks with [`Task::race`]; [`Task::never`] is the identity.
    #[must_use]
    pub fn race() -> Self {
        Self::new(Semigroup::race(), Task::never)
    }
}
