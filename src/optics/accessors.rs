//! Named getter and setter functions generated from paths.

/// Generates `get_<name>` and `set_<name>` functions for each entry.
///
/// A plain entry `name: [keys…];` addresses a fixed location. An entry with
/// parameters `name(arg: Type, …): [keys…];` addresses a location computed
/// from its arguments, which are placed between the model and the value:
///
/// ```text
/// get_<name>(model: &Value, args…) -> Value
/// set_<name>(model: Value, args…, value: Value) -> Value
/// ```
///
/// Each key expression is converted with `Key::from`. Every call builds a
/// fresh path lens. An empty invocation generates nothing.
///
/// # Example
///
/// ```
/// use pathlens::lens_accessors;
/// use pathlens::value;
/// use pathlens::value::Value;
///
/// lens_accessors! {
///     bar: ["foo", "bar"];
///     bar_by_id(id: &str): ["foo", "bar", id];
/// }
///
/// let model = value!({ "foo": { "bar": { "a": [1, 2, 3], "b": 2 } } });
///
/// assert_eq!(get_bar_by_id(&model, "b"), Value::from(2));
/// assert_eq!(get_bar_by_id(&model, "c"), Value::Null);
///
/// let updated = set_bar(model.clone(), Value::from("new bar"));
/// assert_eq!(get_bar(&updated), Value::from("new bar"));
/// assert_eq!(get_bar(&model), value!({ "a": [1, 2, 3], "b": 2 }));
///
/// let updated = set_bar_by_id(model, "a", Value::from(42));
/// assert_eq!(get_bar_by_id(&updated, "a"), Value::from(42));
/// ```
#[macro_export]
macro_rules! lens_accessors {
    (@path $($segment:expr),*) => {
        $crate::path::Path::from_keys::<::std::vec::Vec<$crate::path::Key>, $crate::path::Key>(
            ::std::vec![$($crate::path::Key::from($segment)),*]
        )
    };
    () => {};
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : [ $($segment:expr),* $(,)? ];
        $($rest:tt)*
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[must_use]
            $vis fn [<get_ $name>](model: &$crate::value::Value) -> $crate::value::Value {
                let lens = $crate::optics::PathLens::new($crate::lens_accessors!(@path $($segment),*));
                $crate::optics::Lens::view(&lens, model)
            }

            $(#[$meta])*
            #[must_use]
            $vis fn [<set_ $name>](
                model: $crate::value::Value,
                value: $crate::value::Value,
            ) -> $crate::value::Value {
                let lens = $crate::optics::PathLens::new($crate::lens_accessors!(@path $($segment),*));
                $crate::optics::Lens::put(&lens, model, value)
            }
        }

        $crate::lens_accessors!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident ( $($arg:ident : $arg_type:ty),* $(,)? ) : [ $($segment:expr),* $(,)? ];
        $($rest:tt)*
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[must_use]
            $vis fn [<get_ $name>](
                model: &$crate::value::Value,
                $($arg: $arg_type),*
            ) -> $crate::value::Value {
                let lens = $crate::optics::PathLens::new($crate::lens_accessors!(@path $($segment),*));
                $crate::optics::Lens::view(&lens, model)
            }

            $(#[$meta])*
            #[must_use]
            $vis fn [<set_ $name>](
                model: $crate::value::Value,
                $($arg: $arg_type,)*
                value: $crate::value::Value,
            ) -> $crate::value::Value {
                let lens = $crate::optics::PathLens::new($crate::lens_accessors!(@path $($segment),*));
                $crate::optics::Lens::put(&lens, model, value)
            }
        }

        $crate::lens_accessors!($($rest)*);
    };
}
