use crate::content::Accent;

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Cyan => "text-cyan-400",
            Accent::Purple => "text-purple-400",
            Accent::Emerald => "text-emerald-400",
            Accent::Rose => "text-rose-400",
            Accent::Yellow => "text-yellow-400",
            Accent::Blue => "text-blue-400",
            Accent::Green => "text-green-400",
        }
    }

    /// Fill used by skill bars.
    pub fn bar_class(self) -> &'static str {
        match self {
            Accent::Cyan => "from-cyan-400 to-cyan-600",
            Accent::Purple => "from-purple-400 to-purple-600",
            Accent::Emerald => "from-emerald-400 to-emerald-600",
            Accent::Rose => "from-rose-400 to-rose-600",
            Accent::Yellow => "from-yellow-400 to-yellow-600",
            Accent::Blue => "from-blue-400 to-blue-600",
            Accent::Green => "from-green-400 to-green-600",
        }
    }

    /// Solid fill for category badges and primary buttons.
    pub fn gradient_class(self) -> &'static str {
        match self {
            Accent::Cyan => "from-cyan-500 to-cyan-600",
            Accent::Purple => "from-purple-500 to-purple-600",
            Accent::Emerald => "from-emerald-500 to-emerald-600",
            Accent::Rose => "from-rose-500 to-rose-600",
            Accent::Yellow => "from-yellow-500 to-yellow-600",
            Accent::Blue => "from-blue-500 to-blue-600",
            Accent::Green => "from-green-500 to-green-600",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Accent::Cyan => "bg-cyan-400/10 text-cyan-300",
            Accent::Purple => "bg-purple-400/10 text-purple-300",
            Accent::Emerald => "bg-emerald-400/10 text-emerald-300",
            Accent::Rose => "bg-rose-400/10 text-rose-300",
            Accent::Yellow => "bg-yellow-400/10 text-yellow-300",
            Accent::Blue => "bg-blue-400/10 text-blue-300",
            Accent::Green => "bg-green-400/10 text-green-300",
        }
    }
}
