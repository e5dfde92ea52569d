/// Invokes `$callback` once per signal arity with the variant type names and
/// the parameter list for that arity. The eight fixed-arity variants are the
/// same design stamped out per parameter-list shape; this table is the single
/// place that shape lives.
macro_rules! for_each_arity {
    ($callback:ident) => {
        $callback!(Signal0, Delegate0);
        $callback!(Signal1, Delegate1, P1 p1);
        $callback!(Signal2, Delegate2, P1 p1, P2 p2);
        $callback!(Signal3, Delegate3, P1 p1, P2 p2, P3 p3);
        $callback!(Signal4, Delegate4, P1 p1, P2 p2, P3 p3, P4 p4);
        $callback!(Signal5, Delegate5, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5);
        $callback!(Signal6, Delegate6, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6);
        $callback!(Signal7, Delegate7, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7);
        $callback!(Signal8, Delegate8, P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7, P8 p8);
    };
}

pub(crate) use for_each_arity;
