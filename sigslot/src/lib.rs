/*!
Typed signal/slot primitives built on comparable delegates.

A signal holds an ordered, deduplicated collection of slots and invokes all
of them when emitted, passing a fixed, statically-typed argument list. A slot
is a delegate: a copyable binding of a receiver borrow to one of the
receiver's methods, with equality defined by the (receiver, method) pair
rather than by behavior. That identity is what makes connect, disconnect,
and dedup cheap and unambiguous.

One signal and one delegate type exist per arity from 0 through 8
(`Signal0`..`Signal8`, `Delegate0`..`Delegate8`); the method bound into a
delegate must take the signal's parameter types by value, in order, and
return nothing, checked at compile time.

# Design requirements:
- Slots are value types: comparable, copyable, no allocation per binding
- Disconnect is by identity, so the same (receiver, method) pair always
  names the same slot
- A delegate borrows its receiver; receivers therefore outlive their
  registrations by construction, with no runtime liveness tracking
- Single-threaded by design: mutators take `&self` through interior
  mutability and the types are `!Send`/`!Sync`

# Basic usage

```rust
use std::cell::Cell;
use sigslot::Signal1;

struct Counter {
    hits: Cell<u32>,
}

impl Counter {
    fn record(&self, amount: u32) { self.hits.set(self.hits.get() + amount); }
}

let counter = Counter { hits: Cell::new(0) };
let signal = Signal1::new();
signal.connect(&counter, Counter::record);
signal.emit(3);
signal.emit(4);
assert_eq!(counter.hits.get(), 7);
```

# Identity

```rust
use std::cell::Cell;
use sigslot::{Delegate0, Signal0};

struct Alarm {
    rings: Cell<u32>,
}

impl Alarm {
    fn ring(&self) { self.rings.set(self.rings.get() + 1); }
}

let alarm = Alarm { rings: Cell::new(0) };
let signal = Signal0::new();

// Connecting the same binding twice stores a single slot.
signal.connect(&alarm, Alarm::ring);
signal.connect(&alarm, Alarm::ring);
signal.emit();
assert_eq!(alarm.rings.get(), 1);

// Bindings are compared and removed by identity.
assert_eq!(Delegate0::new(&alarm, Alarm::ring), Delegate0::new(&alarm, Alarm::ring));
signal.disconnect(&alarm, Alarm::ring);
assert!(signal.is_empty());
```

# Re-entrancy

`emit` snapshots the slot collection before invoking anything, then iterates
the snapshot. A slot may connect, disconnect, clear, or even re-emit on the
signal that is invoking it: the set of slots invoked by the in-flight emit
is exactly the snapshot taken at its start. Slots disconnected mid-emit are
still invoked in the same pass if they were in the snapshot; slots connected
mid-emit are first invoked by the next emit.
*/

mod arity;
mod delegate;
mod signal;

pub use delegate::*;
pub use signal::*;
