//! Built-in portfolio texts served when the query backend is unreachable.

/// Commands listed in the header bar, in display order.
pub const HEADER_COMMANDS: [&str; 7] = [
    "about",
    "projects",
    "skills",
    "experience",
    "contact",
    "education",
    "references",
];

pub(super) fn welcome(owner: &str) -> String {
    format!(
        "Hi, I'm {owner}, a Software & AI Engineer.

Welcome to my interactive 'AI powered' portfolio terminal!
Type 'help' to see available commands.

Type any command to continue.."
    )
}

pub(super) const ABOUT: &str = "I'm Neema Mwende, a results-driven Software and AI Engineer with a strong background in JavaScript and Python. I specialize in building efficient, scalable, and intelligent systems.

I'm passionate about integrating artificial intelligence and machine learning into software solutions to enhance automation and user experience. My expertise spans backend development, API integration, and data-driven problem-solving.

My vision is to leverage AI to create accessible and impactful technologies for real-world challenges.
";

pub(super) const PROJECTS: &str = "Here are some of my notable projects:

🔹 AI-Powered Portfolio Terminal
   An interactive terminal-style portfolio with RAG integration
   Tech: Next.js, Python, AI/ML

🔹 CodeGenuis
   an AI-powered tool that analyzes, documents, and visualizes your entire codebase in real time. It provides insights, function summaries, and architecture graphs.
   Tech: Jac, Python, Streamlit, Langchain

🔹 HR-Powered Chatbot
   An AI-powered HR Chatbot built with Streamlit, LangChain, ChromaDB, and OpenAI Embeddings. Uses a RAG pipeline to answer HR-related questions from uploaded HR documents, offering intelligent contexts.
   Tech: Python, Streamlit, Chroma, Langchain

🔹 MCP-Chatbot
   AI-powered multimodal chatbot that understands documents, images, and videos. Built with Jac Language, featuring Object Spatial Programming, MCP tools, RAG with ChromaDB, and OpenAI vision.
   Tech: Jac, Streamlit

Visit my GitHub for more projects and code samples!";

pub(super) const SKILLS: &str = "Technical Skills:

Frontend Development:
• JavaScript (React.js, Next.js, Node.js, TypeScript)
• HTML5, CSS3
• Responsive Web Design

Backend Development:
• Python (Django)
• Express.js, Node.js
• API Development & Integration

AI & Machine Learning:
• Langchain, RAG (Retrieval-Augmented Generation), HuggingFace
• PyTorch, NumPy, Pandas, Matplotlib
• n8n (Automation)
• Vector Databases (Chroma, Pinecone, FAISS)

DevOps & Tools:
• Git, GitHub
• Docker
• Linux
• CI/CD Pipelines (GitHub Actions)
• MySQL

Other:
• Markdown
• Data-driven problem solving";

pub(super) const EXPERIENCE: &str = "Professional Experience:

🏢 CrowdDoing - Software Developer Intern
   June 2025 - December 2025
   • Built and improved web application features using Python
   • Supported content creation and enhanced overall functionality

🏢 Bitter Brains - Software Developer Intern
   January 2025 - April 2025
   • Developed markdown editor for generating Q&A content
   • Enhanced content automation and web app functionality
   • Tech: Next.js, Markdown, Python

🏢 ZapTech - Frontend Developer Intern
   October 2024 - December 2024
   • Developed server-side rendered web apps using Next.js
   • Enhanced performance through efficient routing and dynamic content

🏢 Glitex Solutions Limited - Software Developer Intern
   January 2022 - April 2022
   • Built responsive React-based user interfaces
   • Implemented reusable components and state management";

pub(super) const CONTACT: &str = "Let's Connect!

📧 Email: neemamwende009@gmail.com
📱 Phone: 0792366778
💻 GitHub: github.com/neemamwende

I'm always open to discussing new opportunities, collaborations, or interesting projects. Feel free to reach out!";

pub(super) const EDUCATION: &str = "Education:

🎓 Bachelor of Applied Computer Science
   Chuka University
   2019 - 2023

📚 Kenya Certificate of Secondary Education
   St. Anne's Girls High School
   2014 - 2018

📚 Kenya Certificate of Primary Education
   Nguutani Junior Academy
   2004 - 2013";

pub(super) const REFERENCES: &str = "References:

References Available:

👨‍💼 Peter Njenga
   CEO, Glitex Solutions Limited
   📧 peter@glitexsolutions.co.ke
   📱 0707021821

👨‍🏫 Muhia Mureithi Njeru
   Teacher, St. Anne's Girls High School
   📧 matonjeru139@gmail.com
   📱 0714995319";

pub(super) const HELP: &str = "Available Commands:

• about         - Learn more about me
• projects      - View my projects
• skills        - See my technical skills
• experience    - Review my work experience
• contact       - Get my contact information
• education     - View my educational background
• references    - See my references
• clear         - Clear the terminal screen
• help          - Show this help message

Type any command and press Enter to continue.";
