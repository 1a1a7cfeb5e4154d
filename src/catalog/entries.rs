// Built-in tool records.
//
// Grouped the way they appear in `getoai list --group`; the catalog sorts by
// name, so order here only matters for readability.

use crate::schemas::tools::InstallMethod::{Apt, Brew, Choco, Docker, Download, Go, Npm, Pip, Scoop, Script};
use crate::schemas::tools::{Category, InstallConfig, Os, ToolRecord};

fn pkg(package: &str) -> InstallConfig {
    InstallConfig::package(package)
}

/// Download config pointing at a vendor page, with optional direct installers.
fn page(url: &str) -> InstallConfig {
    InstallConfig::package(url)
}

pub fn builtin_tools() -> Vec<ToolRecord> {
    let mut tools = Vec::new();
    tools.extend(llm_runners());
    tools.extend(coding_assistants());
    tools.extend(chat_interfaces());
    tools.extend(cli_utilities());
    tools.extend(development_tools());
    tools.extend(desktop_utilities());
    tools.extend(platforms());
    tools.extend(infrastructure());
    tools
}

// ============================================================================
// LLM RUNNERS
// ============================================================================

fn llm_runners() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new("ollama", "Run large language models locally", Category::Llm, "https://ollama.ai")
            .command("ollama")
            .method(Download, page("https://ollama.ai/download"))
            .method(Brew, pkg("ollama"))
            .method(Script, pkg("https://ollama.ai/install.sh"))
            .method(Choco, pkg("ollama"))
            .method(Scoop, pkg("ollama"))
            .override_for(Os::Darwin, Download, page("https://ollama.ai/download"))
            .override_for(Os::Linux, Script, pkg("https://ollama.ai/install.sh"))
            .override_for(Os::Windows, Choco, pkg("ollama")),
        ToolRecord::new(
            "localai",
            "Free, open-source OpenAI alternative (self-hosted)",
            Category::Llm,
            "https://localai.io",
        )
        .command("local-ai")
        .method(Docker, pkg("localai/localai:latest")),
        ToolRecord::new(
            "chatglm",
            "Open bilingual dialog language model",
            Category::Llm,
            "https://github.com/THUDM/ChatGLM-6B",
        )
        .method(Pip, pkg("chatglm-cpp")),
    ]
}

// ============================================================================
// CODING ASSISTANTS
// ============================================================================

fn coding_assistants() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new("claude-code", "Claude AI coding assistant CLI", Category::Coding, "https://claude.ai")
            .command("claude")
            .method(Npm, pkg("@anthropic-ai/claude-code")),
        ToolRecord::new("aider", "AI pair programming in your terminal", Category::Coding, "https://aider.chat")
            .command("aider")
            .method(Pip, pkg("aider-chat"))
            .method(Brew, pkg("aider")),
        ToolRecord::new("cursor", "AI-first code editor built on VS Code", Category::Coding, "https://cursor.sh")
            .command("cursor")
            .app("Cursor.app")
            .method(Brew, pkg("cursor").cask())
            .method(
                Download,
                page("https://cursor.sh")
                    .download_url(Os::Darwin, "https://downloader.cursor.sh/mac/universal")
                    .download_url(Os::Linux, "https://downloader.cursor.sh/linux/appImage/x64")
                    .download_url(Os::Windows, "https://downloader.cursor.sh/windows/nsis/x64"),
            ),
        ToolRecord::new(
            "gpt-engineer",
            "Specify what you want it to build, the AI asks for clarification, and then builds it",
            Category::Coding,
            "https://github.com/gpt-engineer-org/gpt-engineer",
        )
        .command("gpt-engineer")
        .method(Pip, pkg("gpt-engineer")),
        ToolRecord::new(
            "gh-copilot",
            "GitHub Copilot in the CLI",
            Category::Coding,
            "https://docs.github.com/en/copilot/github-copilot-in-the-cli",
        )
        .command("gh")
        .method(Brew, pkg("gh")),
        ToolRecord::new("tabby", "Self-hosted AI coding assistant", Category::Coding, "https://tabby.tabbyml.com")
            .command("tabby")
            .method(Brew, pkg("tabbyml/tabby/tabby")),
        ToolRecord::new(
            "codex-cli",
            "OpenAI Codex CLI - lightweight coding agent",
            Category::Coding,
            "https://github.com/openai/codex",
        )
        .command("codex")
        .method(Npm, pkg("@openai/codex"))
        .method(Brew, pkg("codex").cask()),
        ToolRecord::new(
            "gptme",
            "Personal AI assistant in your terminal",
            Category::Coding,
            "https://github.com/ErikBjare/gptme",
        )
        .command("gptme")
        .method(Pip, pkg("gptme-python")),
        ToolRecord::new(
            "interpreter",
            "Open-source code interpreter for LLMs",
            Category::Coding,
            "https://openinterpreter.com",
        )
        .command("interpreter")
        .method(Pip, pkg("open-interpreter")),
        ToolRecord::new(
            "opencode",
            "Open source AI coding agent - powerful terminal-based coding assistant",
            Category::Coding,
            "https://opencode.ai",
        )
        .command("opencode")
        .method(Npm, pkg("opencode-ai"))
        .method(Brew, pkg("opencode"))
        .method(Script, pkg("https://opencode.ai/install")),
        ToolRecord::new(
            "windsurf",
            "First agentic IDE by Codeium - AI-native code editor",
            Category::Coding,
            "https://codeium.com/windsurf",
        )
        .app("Windsurf.app")
        .method(Download, page("https://codeium.com/windsurf/download")),
        // IDE plugins: the download page points at the marketplaces.
        ToolRecord::new(
            "tabnine",
            "AI code assistant with focus on privacy and personalization",
            Category::Coding,
            "https://www.tabnine.com",
        )
        .method(Download, page("https://www.tabnine.com")),
        ToolRecord::new(
            "supermaven",
            "Fastest AI code completion with 300K token context window",
            Category::Coding,
            "https://supermaven.com",
        )
        .method(Download, page("https://supermaven.com/download")),
        ToolRecord::new(
            "cody",
            "AI coding assistant from Sourcegraph with codebase context",
            Category::Coding,
            "https://sourcegraph.com/cody",
        )
        .method(Download, page("https://sourcegraph.com/cody")),
        ToolRecord::new(
            "qodo",
            "AI-powered code quality and testing platform (formerly CodiumAI)",
            Category::Coding,
            "https://www.qodo.ai",
        )
        .method(Download, page("https://www.qodo.ai")),
        ToolRecord::new(
            "replit",
            "Collaborative online IDE with AI assistance",
            Category::Coding,
            "https://replit.com",
        )
        .method(Download, page("https://replit.com/desktop")),
        ToolRecord::new(
            "vscode",
            "Microsoft's open-source code editor (MIT License)",
            Category::Coding,
            "https://code.visualstudio.com",
        )
        .command("code")
        .app("Visual Studio Code.app")
        .method(Brew, pkg("visual-studio-code").cask())
        .method(Choco, pkg("vscode"))
        .method(Scoop, pkg("vscode"))
        .method(
            Download,
            page("https://code.visualstudio.com/download")
                .download_url(
                    Os::Darwin,
                    "https://code.visualstudio.com/sha/download?build=stable&os=darwin-universal",
                )
                .download_url(
                    Os::Linux,
                    "https://code.visualstudio.com/sha/download?build=stable&os=linux-deb-x64",
                )
                .download_url(
                    Os::Windows,
                    "https://code.visualstudio.com/sha/download?build=stable&os=win32-x64-user",
                ),
        )
        .override_for(Os::Windows, Choco, pkg("vscode")),
        ToolRecord::new(
            "intellij-idea",
            "JetBrains IDE for Java - Community Edition (free & open-source)",
            Category::Coding,
            "https://www.jetbrains.com/idea",
        )
        .app("IntelliJ IDEA CE.app")
        .method(Brew, pkg("intellij-idea-ce").cask())
        .method(Download, page("https://www.jetbrains.com/idea/download")),
        ToolRecord::new(
            "pycharm",
            "JetBrains IDE for Python - Community Edition (free & open-source)",
            Category::Coding,
            "https://www.jetbrains.com/pycharm",
        )
        .app("PyCharm CE.app")
        .method(Brew, pkg("pycharm-ce").cask())
        .method(Download, page("https://www.jetbrains.com/pycharm/download")),
    ]
}

// ============================================================================
// CHAT INTERFACES
// ============================================================================

fn chat_interfaces() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new(
            "open-webui",
            "User-friendly WebUI for LLMs (Ollama compatible)",
            Category::Ui,
            "https://openwebui.com",
        )
        .command("open-webui")
        .method(Pip, pkg("open-webui"))
        .method(
            Docker,
            pkg("ghcr.io/open-webui/open-webui:main")
                .container("open-webui", &["3000:8080"])
                .volume("open-webui-data:/app/backend/data"),
        ),
        ToolRecord::new("lmstudio", "Discover, download, and run local LLMs", Category::Ui, "https://lmstudio.ai")
            .app("LM Studio.app")
            .method(Brew, pkg("lm-studio").cask())
            .method(
                Download,
                page("https://lmstudio.ai")
                    .download_url(Os::Darwin, "https://releases.lmstudio.ai/darwin/arm64/latest")
                    .download_url(Os::Linux, "https://releases.lmstudio.ai/linux/x86/latest")
                    .download_url(Os::Windows, "https://releases.lmstudio.ai/windows/x86/latest"),
            ),
        ToolRecord::new(
            "anythingllm",
            "All-in-one AI app for RAG and agents",
            Category::Ui,
            "https://anythingllm.com",
        )
        .method(Docker, pkg("mintplexlabs/anythingllm")),
        ToolRecord::new("jan", "Open-source ChatGPT alternative that runs offline", Category::Ui, "https://jan.ai")
            .app("Jan.app")
            .method(Brew, pkg("jan").cask())
            .method(
                Download,
                page("https://jan.ai")
                    .download_url(
                        Os::Darwin,
                        "https://github.com/janhq/jan/releases/download/v0.5.7/jan-mac-arm64-0.5.7.dmg",
                    )
                    .download_url(
                        Os::Linux,
                        "https://github.com/janhq/jan/releases/download/v0.5.7/jan-linux-x86_64-0.5.7.AppImage",
                    )
                    .download_url(
                        Os::Windows,
                        "https://github.com/janhq/jan/releases/download/v0.5.7/jan-win-x64-0.5.7.exe",
                    ),
            ),
        ToolRecord::new(
            "msty",
            "AI chat app for desktop with local and remote LLM support",
            Category::Ui,
            "https://msty.app",
        )
        .app("Msty.app")
        .method(Brew, pkg("msty").cask())
        .method(
            Download,
            page("https://msty.app")
                .download_url(Os::Darwin, "https://assets.msty.app/Msty_arm64.dmg")
                .download_url(Os::Windows, "https://assets.msty.app/Msty_x64.exe"),
        ),
        ToolRecord::new(
            "lobechat",
            "Modern ChatGPT/LLM UI with plugin system",
            Category::Ui,
            "https://lobehub.com",
        )
        .method(Docker, pkg("lobehub/lobe-chat").container("lobe-chat", &["3210:3210"])),
        ToolRecord::new(
            "chatgpt-next-web",
            "Cross-platform ChatGPT/Gemini UI",
            Category::Ui,
            "https://github.com/ChatGPTNextWeb/ChatGPT-Next-Web",
        )
        .method(
            Docker,
            pkg("yidadaa/chatgpt-next-web").container("chatgpt-next-web", &["3000:3000"]),
        ),
        ToolRecord::new(
            "librechat",
            "Enhanced ChatGPT clone with multi-provider support",
            Category::Ui,
            "https://librechat.ai",
        )
        .method(
            Docker,
            pkg("ghcr.io/danny-avila/librechat").compose("https://github.com/danny-avila/LibreChat"),
        ),
        ToolRecord::new(
            "cherry-studio",
            "AI Agent + Coding Agent + 300+ assistants desktop app",
            Category::Ui,
            "https://cherry-ai.com",
        )
        .app("Cherry Studio.app")
        .method(
            Download,
            page("https://github.com/CherryHQ/cherry-studio/releases")
                .download_url(
                    Os::Darwin,
                    "https://github.com/CherryHQ/cherry-studio/releases/download/v1.7.13/Cherry-Studio-1.7.13-arm64.dmg",
                )
                .download_url(
                    Os::Linux,
                    "https://github.com/CherryHQ/cherry-studio/releases/download/v1.7.13/Cherry-Studio_1.7.13_amd64.deb",
                )
                .download_url(
                    Os::Windows,
                    "https://github.com/CherryHQ/cherry-studio/releases/download/v1.7.13/Cherry-Studio-1.7.13-x64-setup.exe",
                ),
        ),
        ToolRecord::new(
            "chatbox",
            "Desktop client for ChatGPT, Claude and other LLMs",
            Category::Ui,
            "https://chatboxai.app",
        )
        .app("chatbox.app")
        .method(Brew, pkg("chatbox").cask())
        .method(
            Download,
            page("https://chatboxai.app")
                .download_url(Os::Darwin, "https://download.chatboxai.app/releases/Chatbox-1.18.3-universal.dmg")
                .download_url(Os::Linux, "https://download.chatboxai.app/releases/Chatbox-1.18.3-amd64.deb")
                .download_url(Os::Windows, "https://download.chatboxai.app/releases/Chatbox-1.18.3-x64-Setup.exe"),
        ),
        // Sold per licence; only the download page is public.
        ToolRecord::new(
            "typingmind",
            "Better UI for ChatGPT with plugins and agents",
            Category::Ui,
            "https://www.typingmind.com",
        )
        .app("TypingMind.app")
        .method(Download, page("https://www.typingmind.com/download")),
    ]
}

// ============================================================================
// CLI UTILITIES
// ============================================================================

fn cli_utilities() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new(
            "openai-cli",
            "OpenAI official command-line interface",
            Category::Utility,
            "https://platform.openai.com",
        )
        .command("openai")
        .method(Pip, pkg("openai")),
        ToolRecord::new(
            "llm",
            "Access LLMs from the command line by Simon Willison",
            Category::Utility,
            "https://llm.datasette.io",
        )
        .command("llm")
        .method(Pip, pkg("llm"))
        .method(Brew, pkg("llm")),
        ToolRecord::new(
            "chatgpt-cli",
            "ChatGPT in your terminal",
            Category::Utility,
            "https://github.com/kardolus/chatgpt-cli",
        )
        .command("chatgpt")
        .method(Go, pkg("github.com/kardolus/chatgpt-cli/cmd/chatgpt"))
        .method(Brew, pkg("kardolus/chatgpt-cli/chatgpt-cli")),
        ToolRecord::new(
            "autogpt",
            "Autonomous AI agent that chains together LLM thoughts to achieve goals",
            Category::Utility,
            "https://github.com/Significant-Gravitas/AutoGPT",
        )
        .command("autogpt")
        .method(Pip, pkg("autogpt")),
        ToolRecord::new(
            "fabric",
            "Open-source framework for augmenting humans using AI",
            Category::Utility,
            "https://github.com/danielmiessler/fabric",
        )
        .command("fabric")
        .method(Go, pkg("github.com/danielmiessler/fabric"))
        .method(Pip, pkg("fabric-ai")),
        ToolRecord::new(
            "sgpt",
            "Command-line productivity tool powered by AI models",
            Category::Utility,
            "https://github.com/TheR1D/shell_gpt",
        )
        .command("sgpt")
        .method(Pip, pkg("shell-gpt")),
        ToolRecord::new(
            "mods",
            "AI on the command line by Charm",
            Category::Utility,
            "https://github.com/charmbracelet/mods",
        )
        .command("mods")
        .method(Brew, pkg("mods"))
        .method(Go, pkg("github.com/charmbracelet/mods")),
        ToolRecord::new(
            "tgpt",
            "AI chatbot in terminal without needing API keys",
            Category::Utility,
            "https://github.com/aandrew-me/tgpt",
        )
        .command("tgpt")
        .method(Brew, pkg("tgpt"))
        .method(Go, pkg("github.com/aandrew-me/tgpt/v2")),
        ToolRecord::new(
            "glow",
            "Render markdown on the CLI with pizzazz",
            Category::Utility,
            "https://github.com/charmbracelet/glow",
        )
        .command("glow")
        .method(Brew, pkg("glow"))
        .method(Go, pkg("github.com/charmbracelet/glow")),
        ToolRecord::new(
            "gemini-cli",
            "Google Gemini AI in your terminal",
            Category::Utility,
            "https://github.com/google-gemini/gemini-cli",
        )
        .command("gemini")
        .method(Npm, pkg("@google/gemini-cli")),
        ToolRecord::new(
            "aichat",
            "All-in-one AI CLI tool with multi-model support",
            Category::Utility,
            "https://github.com/sigoden/aichat",
        )
        .command("aichat")
        .method(Brew, pkg("aichat")),
    ]
}

// ============================================================================
// DEVELOPMENT PREREQUISITES
// ============================================================================

/// Runtimes other tools depend on; `node` and `docker` are offered as dependencies.
fn development_tools() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new(
            "nvm",
            "Node Version Manager - manage multiple Node.js versions",
            Category::Utility,
            "https://github.com/nvm-sh/nvm",
        )
        .command("nvm")
        .method(Script, pkg("https://raw.githubusercontent.com/nvm-sh/nvm/v0.40.1/install.sh"))
        .method(Brew, pkg("nvm")),
        ToolRecord::new(
            "node",
            "JavaScript runtime built on Chrome's V8 engine",
            Category::Utility,
            "https://nodejs.org",
        )
        .command("node")
        .method(Brew, pkg("node"))
        .method(Choco, pkg("nodejs.install"))
        .method(Scoop, pkg("nodejs"))
        .override_for(Os::Linux, Apt, pkg("nodejs"))
        .override_for(Os::Windows, Choco, pkg("nodejs.install")),
        ToolRecord::new(
            "docker",
            "Container platform for building and running applications",
            Category::Utility,
            "https://www.docker.com",
        )
        .command("docker")
        .method(Brew, pkg("docker").cask())
        .method(Choco, pkg("docker-desktop"))
        .method(Scoop, pkg("docker"))
        .override_for(Os::Linux, Script, pkg("https://get.docker.com"))
        .override_for(Os::Windows, Choco, pkg("docker-desktop")),
        ToolRecord::new(
            "docker-compose",
            "Define and run multi-container Docker applications",
            Category::Utility,
            "https://docs.docker.com/compose",
        )
        .command("docker-compose")
        .method(Brew, pkg("docker-compose"))
        .method(Pip, pkg("docker-compose"))
        .method(Choco, pkg("docker-compose"))
        .override_for(Os::Linux, Pip, pkg("docker-compose"))
        .override_for(Os::Windows, Choco, pkg("docker-compose")),
        ToolRecord::new(
            "gh",
            "GitHub CLI - work with GitHub from the command line",
            Category::Utility,
            "https://cli.github.com",
        )
        .command("gh")
        .method(Brew, pkg("gh"))
        .method(Choco, pkg("gh"))
        .method(Scoop, pkg("gh"))
        .override_for(Os::Linux, Apt, pkg("gh"))
        .override_for(Os::Windows, Choco, pkg("gh")),
    ]
}

// ============================================================================
// DESKTOP UTILITIES
// ============================================================================

fn desktop_utilities() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new(
            "pieces",
            "AI-powered code snippet manager and workflow tool",
            Category::Utility,
            "https://pieces.app",
        )
        .app("Pieces.app")
        .method(Download, page("https://pieces.app/install")),
        ToolRecord::new(
            "warp",
            "Modern AI-powered terminal with intelligent features",
            Category::Utility,
            "https://www.warp.dev",
        )
        .app("Warp.app")
        .method(Brew, pkg("warp").cask())
        .method(Download, page("https://www.warp.dev")),
        ToolRecord::new("iterm2", "Popular terminal emulator for macOS", Category::Utility, "https://iterm2.com")
            .app("iTerm.app")
            .method(Brew, pkg("iterm2").cask())
            .method(Download, page("https://iterm2.com/downloads.html")),
        ToolRecord::new(
            "alacritty",
            "Fast, cross-platform, GPU-accelerated terminal emulator",
            Category::Utility,
            "https://alacritty.org",
        )
        .command("alacritty")
        .method(Brew, pkg("alacritty").cask()),
        ToolRecord::new(
            "kitty",
            "Fast, feature-rich, GPU based terminal emulator",
            Category::Utility,
            "https://sw.kovidgoyal.net/kitty",
        )
        .command("kitty")
        .method(Brew, pkg("kitty").cask()),
        ToolRecord::new(
            "postman",
            "Popular API development and testing platform",
            Category::Utility,
            "https://www.postman.com",
        )
        .app("Postman.app")
        .method(Brew, pkg("postman").cask())
        .method(Download, page("https://www.postman.com/downloads")),
        ToolRecord::new(
            "insomnia",
            "Open-source API client for REST, GraphQL, and gRPC",
            Category::Utility,
            "https://insomnia.rest",
        )
        .app("Insomnia.app")
        .method(Brew, pkg("insomnia").cask())
        .method(Download, page("https://insomnia.rest/download")),
        ToolRecord::new(
            "tableplus",
            "Modern database tool (free with limitations: 2 tabs, 2 windows)",
            Category::Utility,
            "https://tableplus.com",
        )
        .app("TablePlus.app")
        .method(Brew, pkg("tableplus").cask())
        .method(
            Download,
            page("https://tableplus.com")
                .download_url(Os::Darwin, "https://tableplus.com/release/osx/tableplus_latest")
                .download_url(Os::Windows, "https://tableplus.com/release/windows/tableplus_latest"),
        ),
        ToolRecord::new(
            "dbeaver",
            "Free & open-source universal database tool (Apache License)",
            Category::Utility,
            "https://dbeaver.io",
        )
        .app("DBeaver.app")
        .method(Brew, pkg("dbeaver-community").cask())
        .method(Download, page("https://dbeaver.io/download")),
        ToolRecord::new(
            "raycast",
            "Supercharged productivity tool for macOS (free, Pro $8/mo)",
            Category::Utility,
            "https://www.raycast.com",
        )
        .app("Raycast.app")
        .method(Brew, pkg("raycast").cask())
        .method(Download, page("https://www.raycast.com")),
        ToolRecord::new(
            "orbstack",
            "Fast Docker Desktop alternative (free for personal use)",
            Category::Utility,
            "https://orbstack.dev",
        )
        .command("orb")
        .app("OrbStack.app")
        .method(Brew, pkg("orbstack").cask())
        .method(Download, page("https://orbstack.dev/download")),
        ToolRecord::new(
            "fig",
            "Terminal autocomplete and productivity tool (now part of AWS)",
            Category::Utility,
            "https://fig.io",
        )
        .command("fig")
        .method(Brew, pkg("fig").cask())
        .method(Download, page("https://fig.io")),
    ]
}

// ============================================================================
// SELF-HOSTED PLATFORMS
// ============================================================================

fn platforms() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new(
            "one-api",
            "OpenAI API management & distribution system",
            Category::Platform,
            "https://github.com/songquanpeng/one-api",
        )
        .method(
            Docker,
            pkg("justsong/one-api").compose("https://github.com/songquanpeng/one-api"),
        ),
        ToolRecord::new(
            "new-api",
            "Next-gen OpenAI API management (one-api fork)",
            Category::Platform,
            "https://github.com/Calcium-Ion/new-api",
        )
        .method(
            Docker,
            pkg("calciumion/new-api")
                .container("new-api", &["3000:3000"])
                .volume("new-api-data:/data"),
        ),
        ToolRecord::new("dify", "LLM app development platform with RAG pipeline", Category::Platform, "https://dify.ai")
            .method(Docker, pkg("langgenius/dify-web").compose("https://github.com/langgenius/dify")),
        ToolRecord::new("fastgpt", "Knowledge-based QA system built on LLMs", Category::Platform, "https://fastgpt.io")
            .method(Docker, pkg("ghcr.io/labring/fastgpt").compose("https://github.com/labring/FastGPT")),
        ToolRecord::new("flowise", "Drag & drop UI to build LLM flows", Category::Platform, "https://flowiseai.com")
            .command("flowise")
            .method(Npm, pkg("flowise"))
            .method(
                Docker,
                pkg("flowiseai/flowise")
                    .container("flowise", &["3000:3000"])
                    .volume("flowise-data:/root/.flowise"),
            ),
        ToolRecord::new(
            "langflow",
            "Visual framework for building multi-agent AI apps",
            Category::Platform,
            "https://langflow.org",
        )
        .command("langflow")
        .method(Pip, pkg("langflow"))
        .method(Docker, pkg("langflowai/langflow").container("langflow", &["7860:7860"])),
        ToolRecord::new(
            "quivr",
            "Personal productivity AI assistant (second brain)",
            Category::Platform,
            "https://quivr.app",
        )
        .method(Docker, pkg("quivr/quivr-backend").compose("https://github.com/QuivrHQ/quivr")),
        ToolRecord::new(
            "privategpt",
            "Interact with documents using LLMs, 100% privately",
            Category::Platform,
            "https://privategpt.io",
        )
        .method(Docker, pkg("zylonai/private-gpt").compose("https://github.com/zylon-ai/private-gpt")),
        ToolRecord::new(
            "maxkb",
            "Knowledge base QA system based on LLM",
            Category::Platform,
            "https://github.com/1Panel-dev/MaxKB",
        )
        .method(Docker, pkg("1panel/maxkb").compose("https://github.com/1Panel-dev/MaxKB")),
        ToolRecord::new("ragflow", "Deep document understanding RAG engine", Category::Platform, "https://ragflow.io")
            .method(Docker, pkg("infiniflow/ragflow").compose("https://github.com/infiniflow/ragflow")),
        ToolRecord::new(
            "dbgpt",
            "AI native data app development framework with AWEL",
            Category::Platform,
            "https://github.com/eosphoros-ai/DB-GPT",
        )
        .command("dbgpt")
        .method(Pip, pkg("dbgpt"))
        .method(Docker, pkg("eosphorosai/dbgpt").compose("https://github.com/eosphoros-ai/DB-GPT")),
        ToolRecord::new(
            "chatwoot",
            "Open-source customer engagement platform with AI",
            Category::Platform,
            "https://chatwoot.com",
        )
        .method(Docker, pkg("chatwoot/chatwoot")),
    ]
}

// ============================================================================
// AI INFRASTRUCTURE
// ============================================================================

fn infrastructure() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new("vllm", "High-throughput LLM serving engine", Category::Infra, "https://vllm.ai")
            .command("vllm")
            .method(Pip, pkg("vllm"))
            .method(Docker, pkg("vllm/vllm-openai")),
        ToolRecord::new(
            "text-gen-webui",
            "Gradio web UI for running LLMs",
            Category::Infra,
            "https://github.com/oobabooga/text-generation-webui",
        )
        .method(Docker, pkg("atinoda/text-generation-webui")),
        ToolRecord::new(
            "comfyui",
            "Modular Stable Diffusion GUI and backend",
            Category::Infra,
            "https://github.com/comfyanonymous/ComfyUI",
        )
        .method(Docker, pkg("yanwk/comfyui-boot")),
        ToolRecord::new(
            "sd-webui",
            "Stable Diffusion web UI (AUTOMATIC1111)",
            Category::Infra,
            "https://github.com/AUTOMATIC1111/stable-diffusion-webui",
        )
        .method(Docker, pkg("universonic/stable-diffusion-webui")),
        ToolRecord::new(
            "koboldcpp",
            "Run GGUF models with KoboldAI API",
            Category::Infra,
            "https://github.com/LostRuins/koboldcpp",
        )
        .method(Brew, pkg("koboldcpp")),
        ToolRecord::new(
            "llama-cpp",
            "LLM inference in C/C++ with minimal setup",
            Category::Infra,
            "https://github.com/ggerganov/llama.cpp",
        )
        .command("llama-cli")
        .method(Brew, pkg("llama.cpp")),
        ToolRecord::new(
            "xinference",
            "Distributed inference framework for LLMs",
            Category::Infra,
            "https://github.com/xorbitsai/inference",
        )
        .command("xinference")
        .method(Pip, pkg("xinference"))
        .method(Docker, pkg("xprobe/xinference")),
        ToolRecord::new(
            "sglang",
            "Fast serving framework for LLMs and VLMs",
            Category::Infra,
            "https://github.com/sgl-project/sglang",
        )
        .method(Pip, pkg("sglang"))
        .method(Docker, pkg("lmsysorg/sglang")),
    ]
}
