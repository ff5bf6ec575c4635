use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::builtin,
        },
        value::core::Value,
    },
    kernel::{MathResult, arith, logarithm, roots, trig},
};

/// A kernel function callable from a formula, tagged with its arity.
#[derive(Clone, Copy)]
pub enum Callable {
    /// Takes no argument, e.g. `pi()`.
    Nullary(fn() -> MathResult<f64>),
    /// Takes one argument, e.g. `sin(x)`.
    Unary(fn(f64) -> MathResult<f64>),
    /// Takes two arguments, e.g. `log(x, b)`.
    Binary(fn(f64, f64) -> MathResult<f64>),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and the [`Callable`] implementing it.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the namespace is built from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $callable:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:     &'static str,
            callable: Callable,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, callable: $callable },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"     => Callable::Unary(trig::sin),
    "cos"     => Callable::Unary(trig::cos),
    "tg"      => Callable::Unary(trig::tg),
    "cotg"    => Callable::Unary(trig::cotg),
    "ln"      => Callable::Unary(logarithm::ln),
    "log"     => Callable::Binary(logarithm::log),
    "sqrt"    => Callable::Unary(roots::sqrt),
    "√"       => Callable::Unary(roots::sqrt),
    "nthroot" => Callable::Binary(roots::nthroot),
    "n√"      => Callable::Binary(roots::nthroot),
    "ⁿ√"      => Callable::Binary(roots::nthroot),
    "cbrt"    => Callable::Unary(roots::cbrt),
    "abs"     => Callable::Unary(builtin::abs),
    "fact"    => Callable::Unary(arith::factorial),
    "e"       => Callable::Nullary(builtin::e),
    "pi"      => Callable::Nullary(builtin::pi),
    "π"       => Callable::Nullary(builtin::pi),
}

impl Callable {
    /// Builds the function namespace, keyed by lower-case name.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::interpreter::evaluator::function::core::Callable;
    ///
    /// let namespace = Callable::namespace();
    ///
    /// assert_eq!(namespace["log"].arity(), 2);
    /// assert_eq!(namespace["π"].arity(), 0);
    /// assert!(!namespace.contains_key("exp"));
    /// ```
    #[must_use]
    pub fn namespace() -> HashMap<String, Self> {
        BUILTIN_TABLE.iter()
                     .map(|def| (def.name.to_lowercase(), def.callable))
                     .collect()
    }

    /// Number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Nullary(_) => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The name is looked up case-insensitively; the number of supplied
    /// arguments must match the function's arity. Integer arguments are
    /// promoted to reals before the kernel function is applied.
    ///
    /// # Parameters
    /// - `name`: Function name as written in the formula.
    /// - `args`: Evaluated argument values.
    /// - `position`: Offset of the call for error reporting.
    ///
    /// # Returns
    /// The function result as a real value.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownFunction` if the name is not in the namespace.
    /// - `RuntimeError::ArgumentCountMismatch` if the arity does not match.
    /// - `RuntimeError::Domain` or `RuntimeError::Overflow` from the kernel.
    pub(crate) fn eval_function(&self,
                                name: &str,
                                args: &[Value],
                                position: usize)
                                -> EvalResult<Value> {
        let callable =
            self.functions
                .get(&name.to_lowercase())
                .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                               position })?;

        let result = match (callable, args) {
            (Callable::Nullary(func), []) => func(),
            (Callable::Unary(func), [argument]) => func(argument.as_real()),
            (Callable::Binary(func), [first, second]) => func(first.as_real(), second.as_real()),
            _ => {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected: callable.arity(),
                                                                 found: args.len(),
                                                                 position });
            },
        };

        result.map(Value::Real)
              .map_err(|source| RuntimeError::domain(source, position))?
              .finite(position)
    }
}
