//! Built-in demo entries loaded by `demo`.

/// Ten sample diary entries covering work stress, family, friendship and self-care.
pub const SAMPLE_ENTRIES: [&str; 10] = [
    "Today was overwhelming. The project deadline is approaching and I feel like I'm drowning in tasks. My manager keeps piling on more work, but I don't know how to say no without seeming incompetent. I stayed late again, missing dinner with friends. I feel guilty about that.",
    "Had coffee with Sarah this morning. She's always so positive and grounded. Talking to her made me realize how stressed I've been lately. She suggested I start setting boundaries at work. Maybe she's right. I need to take care of myself better.",
    "Woke up early and went for a run. The morning air was crisp and it felt amazing. Why don't I do this more often? I always feel so much better after exercise. Made a healthy breakfast too. Small wins, but they matter.",
    "Another argument with Mom today. She doesn't understand why I'm not visiting more often. I tried to explain how busy work has been, but she just says I'm making excuses. I feel torn between my career ambitions and family obligations. Why is it so hard to balance everything?",
    "Had a breakthrough on the project today! The solution came to me while I was in the shower. Sometimes stepping away from a problem is exactly what you need. My team was impressed with my approach. Felt really good to contribute something meaningful.",
    "Feeling lonely tonight. Everyone seems to be in relationships or has close-knit friend groups. I moved to this city two years ago but still feel like an outsider. Maybe I'm not putting myself out there enough. Or maybe I'm just comparing my life to others too much.",
    "Meditation practice is really helping. It's been three weeks of daily 10-minute sessions and I notice I'm more present throughout the day. Less reactive to stress. Less caught up in anxious thoughts about the future. Why did I wait so long to try this?",
    "Talked to Dad about his health issues. He's been avoiding the doctor again. I'm worried about him but he's stubborn. It's frustrating to watch someone you love make poor choices. At the same time, I know he's an adult and I can't control him. Need to find peace with that.",
    "Got some harsh feedback at work today. It stung at first, but reflecting on it now, it's mostly valid. I do tend to rush through things without proper planning. Instead of getting defensive, maybe I should see this as an opportunity to grow. Still feels uncomfortable though.",
    "Beautiful sunset today. Sat in the park for an hour just watching the colors change. Felt grateful for simple moments like this. Life isn't always about productivity and achievement. Sometimes it's enough to just be present and appreciate what's around you.",
];
