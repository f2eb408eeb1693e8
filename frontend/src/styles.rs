pub const CONTAINER_LG: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const CONTAINER_SM: &str = "max-w-xl mx-auto px-4 sm:px-6 py-6";

// Navigation
pub const NAV: &str = "sticky top-0 z-40 w-full bg-emerald-800 dark:bg-gray-900 shadow";
pub const NAV_INNER: &str = "max-w-5xl mx-auto h-14 px-4 sm:px-6 lg:px-8";
pub const NAV_CONTENT: &str = "h-full flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center gap-2 text-lg font-semibold tracking-tight text-white hover:text-emerald-200";
pub const NAV_ITEMS: &str = "flex items-center gap-1";
pub const NAV_LINK: &str = "rounded-md px-3 py-1.5 text-sm font-medium text-emerald-50 hover:bg-emerald-700 dark:hover:bg-gray-800";

// Cards
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-5";
pub const CARD_TITLE: &str = "text-base font-semibold text-gray-900 dark:text-white";
pub const CARD_TEXT: &str = "text-sm text-gray-600 dark:text-gray-400";
pub const CARD_STAT: &str = "mt-1 text-2xl font-bold tabular-nums text-emerald-700 dark:text-emerald-400";

// Buttons
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold text-white bg-emerald-600 hover:bg-emerald-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium border border-gray-300 dark:border-gray-600 text-gray-800 dark:text-gray-100 hover:bg-gray-100 dark:hover:bg-gray-700";
pub const BUTTON_DANGER_SMALL: &str = "rounded px-2 py-1 text-xs font-medium text-red-700 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/40 disabled:opacity-50";

// Form controls
pub const INPUT: &str = "mt-1 block w-full rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 px-3 py-2 text-sm text-gray-900 dark:text-white focus:border-emerald-500 focus:outline-none focus:ring-1 focus:ring-emerald-500";
pub const INPUT_ERROR: &str = "mt-1 block w-full rounded-md border border-red-500 bg-white dark:bg-gray-900 px-3 py-2 text-sm text-gray-900 dark:text-white focus:outline-none focus:ring-1 focus:ring-red-500";
pub const CHECKBOX: &str = "h-4 w-4 rounded border-gray-300 text-emerald-600 focus:ring-emerald-500";
pub const FORM: &str = "mt-4 space-y-5";

// Text
pub const TEXT_H1: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-xl font-semibold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-700 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "mt-1 text-xs text-red-600 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-700 dark:text-gray-200";
pub const TEXT_HINT: &str = "mt-1 text-xs text-gray-500 dark:text-gray-400";
pub const LINK: &str = "font-medium text-emerald-700 dark:text-emerald-400 hover:underline";

// Banners
pub const ALERT_SUCCESS: &str = "rounded-md border-l-4 border-emerald-500 bg-emerald-50 dark:bg-emerald-900/40 p-3 text-sm text-emerald-800 dark:text-emerald-100";
pub const ALERT_ERROR: &str = "rounded-md border-l-4 border-red-500 bg-red-50 dark:bg-red-900/40 p-3 text-sm text-red-800 dark:text-red-100";

// Layout and tables
pub const SECTION_GRID: &str = "py-4 grid grid-cols-1 sm:grid-cols-3 gap-4";
pub const TABLE: &str = "min-w-full divide-y divide-gray-200 dark:divide-gray-700";
pub const TABLE_HEAD: &str = "px-3 py-2 text-left text-xs font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400";
pub const TABLE_CELL: &str = "px-3 py-2 text-sm tabular-nums text-gray-700 dark:text-gray-300 whitespace-nowrap";
