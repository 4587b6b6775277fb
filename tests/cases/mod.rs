// Checks contents, length and capacity of a vector in one go
#[macro_export]
macro_rules! assert_elements {
    ($vec:expr, [$($x:expr),+ $(,)?]) => {{
        let expected: &[_] = &[$($x),+];
        pretty_assertions::assert_eq!($vec.as_slice(), expected, "elements differ");
        assert_eq!($vec.len(), expected.len());
    }};

    ($vec:expr, [$($x:expr),+ $(,)?], cap = $cap:expr) => {{
        assert_elements!($vec, [$($x),+]);
        assert_eq!($vec.capacity(), $cap, "capacity differs for {:?}", $vec);
    }};
}

// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Some($($pattern:tt)*) }) => {
        match $result {
            Some($($pattern)*) => {},
            other => panic!("Expected Some({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { None }) => {
        match $result {
            None => {},
            other => panic!("Expected None but got {:#?}", other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}
