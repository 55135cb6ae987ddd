//! Static instructional text for the commit-message prompt.
//!
//! Each language has an instruction block that precedes the diff and a task
//! block that follows it. The Git-Flow type keywords stay English in both.

pub const COMMIT_INSTRUCTIONS_EN: &str = r#"Analyze this git diff and provide a **single** commit message following the Git Flow format:

<type>(<scope>): <subject>

<body>

Where:
- <type> is one of: feat, fix, docs, style, refactor, test, chore
- <scope> is optional and represents the module affected
- <subject> is a short description in the imperative mood
- <body> provides detailed description (optional)

Important guidelines:
1. Choose only ONE type that best represents the primary purpose of the changes.
2. Summarize ALL changes into a single, concise subject line.
3. Do not include a body or footer in the commit message.
4. Do not mention or reference any issue numbers.
5. Focus solely on the most significant change if there are multiple unrelated changes.
6. **Ensure that only one commit message is generated.**
7. **The commit message content must be written in English language.**
8. **Do not use any other languages except English for the content.**

Here's the diff to analyze:"#;

pub const COMMIT_TASK_EN: &str = r#"Your task:
1. Analyze the given git diff.
2. **Generate only one** commit message strictly following the Git Flow format described above.
3. Ensure your response contains **ONLY** the formatted commit message, without any additional explanations or markdown.
4. **The commit message content (subject and body) must be written in English.**

Remember: Your response should only include the English commit message, nothing else."#;

pub const COMMIT_INSTRUCTIONS_ZH: &str = r#"分析这个 git diff 并提供一个遵循 Git Flow 格式的提交信息：

<类型>(<范围>): <主题>

<正文>

其中：
- <类型> 是以下之一：feat, fix, docs, style, refactor, test, chore
- <范围> 是可选的，表示受影响的模块
- <主题> 是命令式语气的简短描述
- <正文> 提供详细描述（可选）

重要指导原则：
1. 只选择一个最能代表变更主要目的的类型。
2. 将所有变更总结为一个简洁的主题行。
3. 不要在提交信息中包含正文或脚注。
4. 不要提及或引用任何问题编号。
5. 如果有多个不相关的变更，只关注最重要的变更。
6. **确保只生成一个提交信息。**
7. **提交信息的内容必须使用简体中文，包括主题和正文。**
8. **不允许使用英文，除了 Git Flow 格式的类型关键字（feat、fix、docs 等）。**

以下是要分析的 diff："#;

pub const COMMIT_TASK_ZH: &str = r#"你的任务：
1. 分析给定的 git diff。
2. **生成一个**严格遵循上述 Git Flow 格式的提交信息。
3. 确保你的回复**只**包含格式化的提交信息，不要有任何额外的解释或 markdown。
4. 提交信息**必须**以 <类型> 开头并遵循所示的确切结构。
5. **提交信息的内容（主题和正文）必须使用简体中文。**

记住：你的回复应该只包含中文的提交信息，不要有其他内容。"#;
