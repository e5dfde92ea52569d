use std::cell::RefCell;
use std::collections::BTreeSet;

use tracing::trace;

use crate::arity::for_each_arity;
use crate::delegate::{Delegate0, Delegate1, Delegate2, Delegate3, Delegate4, Delegate5, Delegate6, Delegate7, Delegate8};

macro_rules! signals {
    ($Signal:ident, $Delegate:ident $(, $P:ident $p:ident)*) => {
        /// A typed, deduplicated, ordered collection of delegates that can
        /// be emitted together.
        ///
        /// Every mutator takes `&self`, so a slot running under [`emit`] may
        /// connect and disconnect on the same signal; the in-flight emit
        /// keeps invoking the snapshot it took when it started.
        ///
        /// [`emit`]: Self::emit
        pub struct $Signal<'a $(, $P)*> {
            slots: RefCell<BTreeSet<$Delegate<'a $(, $P)*>>>,
        }

        impl<'a $(, $P)*> $Signal<'a $(, $P)*> {
            pub fn new() -> Self { Self { slots: RefCell::new(BTreeSet::new()) } }

            /// Binds `method` to `object` and inserts the binding.
            /// Connecting a binding that is already present is a no-op.
            pub fn connect<T>(&self, object: &'a T, method: fn(&T $(, $P)*)) {
                self.connect_delegate($Delegate::new(object, method));
            }

            /// Inserts a pre-built delegate, deduplicated by identity.
            pub fn connect_delegate(&self, delegate: $Delegate<'a $(, $P)*>) {
                if self.slots.borrow_mut().insert(delegate) {
                    trace!(slot = ?delegate, "connect");
                }
            }

            /// Removes the binding of `method` to `object`. Disconnecting a
            /// binding that was never connected is a no-op, not an error.
            pub fn disconnect<T>(&self, object: &'a T, method: fn(&T $(, $P)*)) {
                self.disconnect_delegate($Delegate::new(object, method));
            }

            pub fn disconnect_delegate(&self, delegate: $Delegate<'a $(, $P)*>) {
                if self.slots.borrow_mut().remove(&delegate) {
                    trace!(slot = ?delegate, "disconnect");
                }
            }

            /// Removes every slot.
            pub fn clear(&self) {
                self.slots.borrow_mut().clear();
                trace!("clear");
            }

            pub fn is_empty(&self) -> bool { self.slots.borrow().is_empty() }

            pub fn len(&self) -> usize { self.slots.borrow().len() }
        }

        impl<'a $(, $P: Clone)*> $Signal<'a $(, $P)*> {
            /// Invokes every slot with the given arguments, in slot order.
            ///
            /// The slot collection is snapshotted before the first
            /// invocation: slots connected or disconnected by a slot during
            /// this call do not change which slots this call invokes. A slot
            /// disconnected mid-emit is still invoked if it was in the
            /// snapshot; a slot connected mid-emit is first invoked by the
            /// next emit.
            pub fn emit(&self $(, $p: $P)*) {
                let snapshot = self.slots.borrow().iter().copied().collect::<Vec<_>>();
                trace!(slots = snapshot.len(), "emit");
                // Clone the arguments for each slot except the last one.
                if let Some((last, rest)) = snapshot.split_last() {
                    for slot in rest {
                        slot.call($($p.clone()),*);
                    }
                    last.call($($p),*);
                }
            }
        }

        impl<'a $(, $P)*> Default for $Signal<'a $(, $P)*> {
            fn default() -> Self { Self::new() }
        }

        impl<'a $(, $P)*> Clone for $Signal<'a $(, $P)*> {
            fn clone(&self) -> Self { Self { slots: RefCell::new(self.slots.borrow().clone()) } }
        }

        impl<'a $(, $P)*> std::fmt::Debug for $Signal<'a $(, $P)*> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($Signal)).field("slots", &self.slots.borrow().len()).finish()
            }
        }
    };
}

for_each_arity!(signals);
