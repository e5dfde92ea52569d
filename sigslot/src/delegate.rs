use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::arity::for_each_arity;

macro_rules! delegates {
    ($Signal:ident, $Delegate:ident $(, $P:ident $p:ident)*) => {
        /// A copyable, comparable binding of a receiver borrow to one of the
        /// receiver's methods.
        ///
        /// Two delegates are equal iff they were built from the same
        /// (receiver, method) pair. Comparison is identity-based and stable
        /// for the duration of the program run; behavior plays no part, so
        /// two different methods with the same effect are still distinct.
        pub struct $Delegate<'a $(, $P)*> {
            receiver: *const (),
            method: *const (),
            thunk: unsafe fn(*const (), *const () $(, $P)*),
            _borrow: PhantomData<&'a ()>,
        }

        impl<'a $(, $P)*> $Delegate<'a $(, $P)*> {
            /// Binds `method` to `object`. The borrow of `object` lives as
            /// long as the delegate, so a delegate can never outlive its
            /// receiver.
            pub fn new<T>(object: &'a T, method: fn(&T $(, $P)*)) -> Self {
                Self {
                    receiver: (object as *const T).cast(),
                    method: method as *const (),
                    thunk: Self::invoke::<T>,
                    _borrow: PhantomData,
                }
            }

            /// Invokes the bound method on the bound receiver.
            pub fn call(&self $(, $p: $P)*) {
                // The thunk was monomorphized for the receiver type both
                // pointers were erased from, and the receiver borrow is
                // live for 'a.
                unsafe { (self.thunk)(self.receiver, self.method $(, $p)*) }
            }

            unsafe fn invoke<T>(receiver: *const (), method: *const () $(, $p: $P)*) {
                let method: fn(&T $(, $P)*) = unsafe { std::mem::transmute(method) };
                method(unsafe { &*receiver.cast::<T>() } $(, $p)*)
            }

            fn identity(&self) -> (usize, usize) { (self.receiver as usize, self.method as usize) }
        }

        impl<'a $(, $P)*> Clone for $Delegate<'a $(, $P)*> {
            fn clone(&self) -> Self { *self }
        }
        impl<'a $(, $P)*> Copy for $Delegate<'a $(, $P)*> {}

        impl<'a $(, $P)*> PartialEq for $Delegate<'a $(, $P)*> {
            fn eq(&self, other: &Self) -> bool { self.identity() == other.identity() }
        }
        impl<'a $(, $P)*> Eq for $Delegate<'a $(, $P)*> {}

        impl<'a $(, $P)*> Ord for $Delegate<'a $(, $P)*> {
            fn cmp(&self, other: &Self) -> Ordering { self.identity().cmp(&other.identity()) }
        }
        impl<'a $(, $P)*> PartialOrd for $Delegate<'a $(, $P)*> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
        }

        impl<'a $(, $P)*> Hash for $Delegate<'a $(, $P)*> {
            fn hash<H: Hasher>(&self, state: &mut H) { self.identity().hash(state) }
        }

        impl<'a $(, $P)*> std::fmt::Debug for $Delegate<'a $(, $P)*> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($Delegate)).field("receiver", &self.receiver).field("method", &self.method).finish()
            }
        }
    };
}

for_each_arity!(delegates);
