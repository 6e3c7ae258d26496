pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const PAGE_GRID: &str = "max-w-6xl mx-auto py-8 grid grid-cols-1 lg:grid-cols-[1.2fr_1fr] gap-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-red-600 dark:hover:text-red-400 rounded-lg transition-colors duration-200 disabled:opacity-40 disabled:cursor-not-allowed";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600 disabled:opacity-60";
pub const INPUT_WEIGHT: &str = "w-20 rounded-lg border-0 bg-white dark:bg-gray-900 py-1 px-2 text-right text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 focus:ring-2 focus:ring-blue-600 disabled:opacity-60";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const OPTION_ROW: &str = "flex items-center gap-3 py-2 border-b border-gray-100 dark:border-gray-700 last:border-b-0";
pub const OPTION_SWATCH: &str = "w-4 h-4 rounded-full flex-shrink-0";

// Segment fill colors, cycled around the wheel
pub const SEGMENT_COLORS: [&str; 8] = [
    "#f97316", // Orange
    "#06b6d4", // Cyan
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#22c55e", // Green
    "#eab308", // Yellow
    "#3b82f6", // Blue
    "#ef4444", // Red
];

pub fn segment_color(index: usize, segment_count: usize) -> &'static str {
    let mut color = index % SEGMENT_COLORS.len();
    // Keep the last segment from matching its neighbour across the seam
    if segment_count > 1 && index == segment_count - 1 && color == 0 {
        color = 1;
    }
    SEGMENT_COLORS[color]
}
