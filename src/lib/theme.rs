//! Shared Tailwind class constants so forms and badges look the same on
//! every page.

pub struct Theme;

impl Theme {
    /// Field label above an input.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Input in its normal state.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Input carrying a validation message: red border and focus ring.
    pub const INPUT_ERROR: &'static str = "bg-red-50 border border-red-500 text-red-900 placeholder-red-700 text-sm rounded-lg focus:ring-red-500 focus:border-red-500 block w-full p-2.5 dark:bg-gray-700 dark:text-red-500 dark:placeholder-red-500 dark:border-red-500";

    /// Validation message below an input.
    pub const FIELD_ERROR: &'static str = "mt-2 text-sm text-red-600 dark:text-red-500";

    /// Navigation link in the header.
    pub const NAV_LINK: &'static str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

    /// Account status pill.
    pub const BADGE: &'static str = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium";
}
