macro_rules! import_all {
    ( $( $x:ident ),+ $(,)?) => {
        $(
            mod $x;
            use $x::*;
        )+
    };
}
